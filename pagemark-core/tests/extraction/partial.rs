//! Partial-selection extraction tests (block ranges, strategy handoff)

use pagemark_core::{ExtractError, Selection, StrategyPipeline};

use crate::common::fixture_page;

#[test]
fn test_block_range_keeps_only_selected_blocks() {
    let page = fixture_page("editor-page.html");
    let selection = Selection::between_blocks(&page, "blk-agenda", "blk-i2").unwrap();
    let markdown = StrategyPipeline::with_defaults().extract(&page, &selection);
    assert_eq!(
        markdown,
        "## アジェンダ\n- 進捗レビュー\n- リリース計画の*見直し*"
    );
}

#[test]
fn test_single_block_range() {
    let page = fixture_page("editor-page.html");
    let selection = Selection::between_blocks(&page, "blk-q", "blk-q").unwrap();
    let markdown = StrategyPipeline::with_defaults().extract(&page, &selection);
    assert_eq!(markdown, "> 速さは品質である");
}

#[test]
fn test_heading_only_range_hands_off_to_the_next_strategy() {
    // the primary scan distrusts heading-only output; the aggressive pass
    // accepts the same line
    let page = fixture_page("editor-page.html");
    let selection = Selection::between_blocks(&page, "blk-agenda", "blk-agenda").unwrap();
    let outcome = StrategyPipeline::with_defaults().extract_with_trace(&page, &selection);
    assert_eq!(outcome.strategy, "aggressive-text");
    assert_eq!(outcome.markdown, "## アジェンダ");
}

#[test]
fn test_range_across_todo_blocks_keeps_checkbox_state() {
    let page = fixture_page("editor-page.html");
    let selection = Selection::between_blocks(&page, "blk-t1", "blk-t2").unwrap();
    let markdown = StrategyPipeline::with_defaults().extract(&page, &selection);
    assert_eq!(markdown, "- [x] 議事録を共有\n- [ ] 日程を調整");
}

#[test]
fn test_unknown_block_id_is_reported() {
    let page = fixture_page("editor-page.html");
    let err = Selection::between_blocks(&page, "blk-agenda", "no-such-block").unwrap_err();
    assert!(matches!(err, ExtractError::NodeNotFound(id) if id == "no-such-block"));
}
