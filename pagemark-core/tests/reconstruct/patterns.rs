//! Reconstruction tests over plain-text captures

use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use pagemark_core::markdown_from_text;

use crate::common::load_fixture;

#[test]
fn test_meeting_notes_reconstruct() {
    let markdown = markdown_from_text(&load_fixture("meeting-notes.txt"));
    assert_snapshot!(markdown, @r###"
会議メモ

## 1-1. 現状の課題
認知度が低い
- 広告費が限られている
- 既存チャネルが弱い

## 1-2. 施策
1. SNS企画を立ち上げる
2. 月次レポートを公開する

**担当**: 田中
**期限**: 2026-07-31
参考: https://example.com/notes
"###);
}

#[test]
fn test_reconstructed_notes_are_stable() {
    let once = markdown_from_text(&load_fixture("meeting-notes.txt"));
    assert_eq!(markdown_from_text(&once), once);
}

#[test]
fn test_reconstructed_notes_parse_cleanly() {
    let markdown = markdown_from_text(&load_fixture("meeting-notes.txt"));

    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &ComrakOptions::default());

    let mut section_headings = 0;
    let mut saw_list = false;
    for child in root.children() {
        match &child.data.borrow().value {
            NodeValue::Heading(h) if h.level == 2 => section_headings += 1,
            NodeValue::List(_) => saw_list = true,
            _ => {}
        }
    }
    assert_eq!(section_headings, 2);
    assert!(saw_list, "expected the bullet rows to form a list");
}

#[test]
fn test_worked_examples() {
    assert_eq!(markdown_from_text("1-4. Scope"), "## 1-4. Scope");
    assert_eq!(markdown_from_text("・Buy milk"), "- Buy milk");
    assert_eq!(markdown_from_text("期間：8～12週"), "**期間**: 8～12週");
}
