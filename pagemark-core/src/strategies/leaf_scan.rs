//! Identity-block scanning, the primary strategy
//!
//! Scans the live page for identity-bearing blocks, keeps the leaves that
//! intersect the selection, and formats each through the classifier. The
//! live page is deliberate: checkbox state and editable leaves are read
//! from the real tree, not a clone.

use super::ExtractionStrategy;
use crate::blocks::{block_text, format_block};
use crate::classify::classify_block;
use crate::dom::{blocks_with_paths, is_leaf_block, Page};
use crate::selection::Selection;

pub struct LeafBlockScan;

impl ExtractionStrategy for LeafBlockScan {
    fn name(&self) -> &'static str {
        "leaf-scan"
    }

    fn extract(&self, page: &Page, selection: &Selection) -> Option<String> {
        let root = page.document();
        let mut lines = Vec::new();
        for (block, path) in blocks_with_paths(&root) {
            if !is_leaf_block(&block) {
                continue;
            }
            if !selection.intersects_path(&path) {
                continue;
            }
            let text = block_text(&block);
            if text.trim().is_empty() {
                continue;
            }
            if let Some(line) = format_block(classify_block(&block), &text) {
                lines.push(line);
            }
        }
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// An output that is nothing but headings usually means the selection
    /// grazed a title without its body; a later strategy will read the
    /// actual content.
    fn is_low_confidence(&self, output: &str) -> bool {
        let mut saw_line = false;
        for line in output.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if !line.starts_with('#') {
                return false;
            }
            saw_line = true;
        }
        saw_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scans_leaf_blocks_in_order() {
        let page = Page::parse(concat!(
            "<div data-block-id=\"1\" class=\"header-block\"><div contenteditable=\"true\">Title</div></div>",
            "<div data-block-id=\"2\" class=\"bulleted_list-block\"><div contenteditable=\"true\">first</div></div>",
            "<div data-block-id=\"3\" class=\"text-block\"><div contenteditable=\"true\">body</div></div>",
        ))
        .unwrap();
        let sel = Selection::entire(&page);
        let markdown = LeafBlockScan.extract(&page, &sel).unwrap();
        assert_eq!(markdown, "# Title\n- first\nbody");
    }

    #[test]
    fn test_container_blocks_are_skipped() {
        let page = Page::parse(concat!(
            "<div data-block-id=\"outer\" class=\"toggle-block\">",
            "<div contenteditable=\"true\">toggle label</div>",
            "<div data-block-id=\"inner\"><div contenteditable=\"true\">inside</div></div>",
            "</div>",
        ))
        .unwrap();
        let sel = Selection::entire(&page);
        let markdown = LeafBlockScan.extract(&page, &sel).unwrap();
        assert_eq!(markdown, "inside");
    }

    #[test]
    fn test_blocks_outside_selection_ignored() {
        let page = Page::parse(concat!(
            "<div data-block-id=\"a\"><div contenteditable=\"true\">alpha</div></div>",
            "<div data-block-id=\"b\"><div contenteditable=\"true\">beta</div></div>",
            "<div data-block-id=\"c\"><div contenteditable=\"true\">gamma</div></div>",
        ))
        .unwrap();
        let sel = Selection::between_blocks(&page, "a", "b").unwrap();
        let markdown = LeafBlockScan.extract(&page, &sel).unwrap();
        assert_eq!(markdown, "alpha\nbeta");
    }

    #[test]
    fn test_empty_blocks_produce_no_lines() {
        let page = Page::parse(concat!(
            "<div data-block-id=\"a\"><div contenteditable=\"true\">  </div></div>",
            "<div data-block-id=\"b\"><div contenteditable=\"true\">kept</div></div>",
        ))
        .unwrap();
        let sel = Selection::entire(&page);
        assert_eq!(LeafBlockScan.extract(&page, &sel).as_deref(), Some("kept"));
    }

    #[test]
    fn test_heading_only_output_is_low_confidence() {
        let strategy = LeafBlockScan;
        assert!(strategy.is_low_confidence("# Title"));
        assert!(strategy.is_low_confidence("# Title\n## Sub"));
        assert!(!strategy.is_low_confidence("# Title\nbody"));
        assert!(!strategy.is_low_confidence(""));
    }
}
