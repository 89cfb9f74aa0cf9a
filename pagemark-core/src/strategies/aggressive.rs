//! Aggressive per-block text, the second strategy
//!
//! Runs when the primary scan found blocks but could not read their text.
//! Scoped to the selection's content root, it digs harder per block
//! (editable descendants of any kind, then the flattened block), and with
//! no blocks at all falls back to the text of intersecting editable
//! elements. Whatever it gathers goes through the pattern reconstructor,
//! since text recovered this way has lost its structural prefixes.

use super::ExtractionStrategy;
use crate::blocks::{block_text_aggressive, format_block};
use crate::classify::classify_block;
use crate::dom::{
    attr, class_contains, is_leaf_block, matches_with_paths, node_at_path, path_to, text_content,
    Page,
};
use crate::reconstruct::reconstruct;
use crate::selection::Selection;
use markup5ever_rcdom::Handle;

pub struct AggressiveText;

impl ExtractionStrategy for AggressiveText {
    fn name(&self) -> &'static str {
        "aggressive-text"
    }

    fn extract(&self, page: &Page, selection: &Selection) -> Option<String> {
        let root = page.document();
        let (scope, scope_path) = content_root(&root, selection);

        let mut lines = Vec::new();
        for (block, rel_path) in matches_with_paths(&scope, &|n: &Handle| {
            attr(n, crate::dom::IDENTITY_ATTR).is_some()
        }) {
            let mut path = scope_path.clone();
            path.extend(rel_path);
            if !is_leaf_block(&block) || !selection.intersects_path(&path) {
                continue;
            }
            let text = block_text_aggressive(&block);
            if text.trim().is_empty() {
                continue;
            }
            if let Some(line) = format_block(classify_block(&block), &text) {
                lines.push(line);
            }
        }

        if lines.is_empty() {
            for (editable, rel_path) in matches_with_paths(&scope, &|n: &Handle| {
                attr(n, "contenteditable").is_some()
            }) {
                let mut path = scope_path.clone();
                path.extend(rel_path);
                if !selection.intersects_path(&path) {
                    continue;
                }
                let text = text_content(&editable).trim().to_string();
                if !text.is_empty() {
                    lines.push(text);
                }
            }
        }

        if lines.is_empty() {
            None
        } else {
            Some(reconstruct(&lines.join("\n")))
        }
    }
}

/// The nearest ancestor-or-self of the selection's common ancestor whose
/// class marks it as the page content surface, else the ancestor itself.
fn content_root(root: &Handle, selection: &Selection) -> (Handle, Vec<usize>) {
    let ancestor = selection.common_ancestor(root);
    let ancestor_path = path_to(root, &ancestor).unwrap_or_default();
    let mut probe = ancestor_path.clone();
    loop {
        if let Some(node) = node_at_path(root, &probe) {
            if class_contains(&node, "page-content") {
                return (node, probe);
            }
        }
        if probe.pop().is_none() {
            break;
        }
    }
    (ancestor, ancestor_path)
}
