//! Whole-page extraction tests (captured page → Markdown)

use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use pagemark_core::{inspect, markdown_from_html, Selection, StrategyPipeline};

use crate::common::{fixture_page, load_fixture};

#[test]
fn test_editor_page_extracts_every_block_kind() {
    let markdown = markdown_from_html(&load_fixture("editor-page.html")).unwrap();
    assert_snapshot!(markdown, @r###"
# プロダクト定例メモ
2026-06-12 **第14回**
## アジェンダ
- 進捗レビュー
- リリース計画の*見直し*
### 次のステップ
1. ドラフトを仕上げる
1. レビューを依頼する
- [x] 議事録を共有
- [ ] 日程を調整
> 速さは品質である
> リンクは[こちら](https://example.com/plan)です
```
cargo run --release
```
折りたたみの中身 ~~旧案~~
"###);
}

#[test]
fn test_editor_page_wins_with_the_primary_strategy() {
    let page = fixture_page("editor-page.html");
    let selection = Selection::entire(&page);
    let outcome = StrategyPipeline::with_defaults().extract_with_trace(&page, &selection);
    assert_eq!(outcome.strategy, "leaf-scan");
}

#[test]
fn test_fragment_without_ids_falls_to_the_clone_walk() {
    let page = fixture_page("fragment-no-ids.html");
    let selection = Selection::entire(&page);
    let outcome = StrategyPipeline::with_defaults().extract_with_trace(&page, &selection);
    assert_eq!(outcome.strategy, "clone-walk");
    assert_snapshot!(outcome.markdown, @r###"
企画サマリー
**目的**: 認知度の向上
- SNSでの露出を増やす
- [ドラフト](https://example.com/draft)を共有する
> 小さく始める
"###);
}

#[test]
fn test_inspection_report_covers_the_page() {
    let page = fixture_page("editor-page.html");
    let selection = Selection::entire(&page);
    let report = inspect(&page, &selection);

    assert_eq!(report.strategy, "leaf-scan");
    assert_eq!(report.blocks.len(), 15);

    let roles: Vec<&str> = report.blocks.iter().map(|b| b.role.as_str()).collect();
    assert_eq!(
        roles,
        vec![
            "heading_1",
            "paragraph",
            "heading_2",
            "bullet_item",
            "bullet_item",
            "heading_3",
            "numbered_item",
            "numbered_item",
            "todo_item",
            "todo_item",
            "quote",
            "callout",
            "code_block",
            "paragraph",
            "paragraph",
        ]
    );

    // the placeholder block contributes no Markdown line
    let empty = report.blocks.iter().find(|b| b.block_id == "blk-empty").unwrap();
    assert_eq!(empty.markdown, None);
    assert!(!report.markdown.contains("入力してください"));
}

#[test]
fn test_extracted_markdown_parses_cleanly() {
    let markdown = markdown_from_html(&load_fixture("editor-page.html")).unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &ComrakOptions::default());

    let mut saw_title = false;
    let mut saw_list = false;
    let mut saw_quote = false;
    let mut saw_code = false;
    for child in root.children() {
        match &child.data.borrow().value {
            NodeValue::Heading(h) if h.level == 1 => saw_title = true,
            NodeValue::List(_) => saw_list = true,
            NodeValue::BlockQuote => saw_quote = true,
            NodeValue::CodeBlock(_) => saw_code = true,
            _ => {}
        }
    }
    assert!(saw_title, "expected a level-1 heading");
    assert!(saw_list, "expected at least one list");
    assert!(saw_quote, "expected a block quote");
    assert!(saw_code, "expected a fenced code block");
}

#[test]
fn test_malformed_markup_still_extracts() {
    let wild = "<div><span>unclosed <div data-block-id='x' class='quote-block'>q</div> <p>tail";
    assert_eq!(markdown_from_html(wild).unwrap(), "> q");
}

#[test]
fn test_empty_page_yields_empty_output() {
    assert_eq!(markdown_from_html("<div></div>").unwrap(), "");
}
