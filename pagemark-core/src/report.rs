//! Extraction inspection report
//!
//! A serializable account of what the extractor saw: which strategy won,
//! the Markdown it produced, and a per-block breakdown of every leaf block
//! the selection touches. This is the data behind `pagemark inspect`.

use serde::Serialize;

use crate::blocks::{block_text, format_block};
use crate::classify::classify_block;
use crate::dom::{attr, blocks_with_paths, is_leaf_block, Page, IDENTITY_ATTR};
use crate::selection::Selection;
use crate::strategies::StrategyPipeline;

/// One leaf block as the extractor saw it.
#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    /// Position among the selection's leaf blocks, in document order
    pub index: usize,
    pub block_id: String,
    pub role: String,
    /// Inline-formatted text before the role mapping was applied
    pub text: String,
    /// The Markdown line this block contributed, absent when the block
    /// was empty after trimming
    pub markdown: Option<String>,
}

/// The full inspection result for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// Name of the strategy whose output was kept
    pub strategy: String,
    pub markdown: String,
    pub blocks: Vec<BlockReport>,
}

/// Run the standard cascade and describe both the outcome and every leaf
/// block the selection intersects.
pub fn inspect(page: &Page, selection: &Selection) -> ExtractionReport {
    let outcome = StrategyPipeline::with_defaults().extract_with_trace(page, selection);

    let document = page.document();
    let mut blocks = Vec::new();
    for (node, path) in blocks_with_paths(&document) {
        if !is_leaf_block(&node) || !selection.intersects_path(&path) {
            continue;
        }
        let role = classify_block(&node);
        let text = block_text(&node);
        let markdown = format_block(role, &text);
        blocks.push(BlockReport {
            index: blocks.len(),
            block_id: attr(&node, IDENTITY_ATTR).unwrap_or_default(),
            role: role.name().to_string(),
            text,
            markdown,
        });
    }

    ExtractionReport {
        strategy: outcome.strategy.to_string(),
        markdown: outcome.markdown,
        blocks,
    }
}
