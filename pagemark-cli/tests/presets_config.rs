use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn presets_lists_the_default_roster() {
    let mut cmd = cargo_bin_cmd!("pagemark");
    cmd.arg("presets");

    let output_pred = predicate::str::contains("シンプル・ミニマル")
        .and(predicate::str::contains("モノトーン"))
        .and(predicate::str::contains("カラフル・キャッチー"))
        .and(predicate::str::contains("プロフェッショナル"))
        .and(predicate::str::contains("イラスト風"))
        .and(predicate::str::contains("モダン・スタイリッシュ"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn presets_json_is_parseable() {
    let mut cmd = cargo_bin_cmd!("pagemark");
    cmd.arg("presets").arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let presets: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let roster = presets.as_array().unwrap();
    assert_eq!(roster.len(), 6);
    assert_eq!(roster[0]["name"], "シンプル・ミニマル");
    assert!(roster[0]["prompt"].as_str().unwrap().contains("シンプル"));
}

#[test]
fn config_file_replaces_the_preset_roster() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("pagemark.toml");
    fs::write(
        &config_path,
        r#"[[presets]]
name = "テスト用"
prompt = "テストのためのスタイル"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("pagemark");
    cmd.arg("presets")
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("テスト用"));
    assert!(!stdout.contains("シンプル・ミニマル"));
}

#[test]
fn overrides_reject_unknown_keys() {
    let mut cmd = cargo_bin_cmd!("pagemark");
    cmd.arg("presets").arg("--extra-bogus");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown --extra overrides: bogus"));
}

#[test]
fn overrides_reject_bad_numbers() {
    let mut cmd = cargo_bin_cmd!("pagemark");
    cmd.arg("presets").arg("--extra-temperature").arg("abc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid numeric value"));
}
