//! Block-level Markdown emission
//!
//! One block becomes at most one Markdown line. The role decides the
//! prefix; empty text suppresses the line entirely, whatever the role, so
//! placeholder blocks never leave stray `- ` or `> ` markers behind.

use crate::classify::BlockRole;
use crate::dom::{
    attr, clone_without, descendants_where, find_descendant, text_content, IDENTITY_ATTR,
};
use crate::inline::format_inline;
use markup5ever_rcdom::Handle;
use std::rc::Rc;

/// Render one block line. `None` when the trimmed text is empty.
///
/// Numbered items always emit the literal `1.`; Markdown renderers assign
/// the real ordinals, and the source never exposes its own.
pub fn format_block(role: BlockRole, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let line = match role {
        BlockRole::Heading1 => format!("# {text}"),
        BlockRole::Heading2 => format!("## {text}"),
        BlockRole::Heading3 => format!("### {text}"),
        BlockRole::BulletItem => format!("- {text}"),
        BlockRole::NumberedItem => format!("1. {text}"),
        BlockRole::TodoItem { checked: true } => format!("- [x] {text}"),
        BlockRole::TodoItem { checked: false } => format!("- [ ] {text}"),
        BlockRole::Quote | BlockRole::Callout => format!("> {text}"),
        BlockRole::CodeBlock => format!("```\n{text}\n```"),
        BlockRole::Toggle | BlockRole::Paragraph => text.to_string(),
    };
    Some(line)
}

/// Text of a block, preferring its editable leaf.
///
/// The editor marks the authored run with `contenteditable`, falling back
/// to the leaf marker attribute or a placeholder carrier. Only when none
/// exists is the whole block flattened, minus any nested blocks.
pub fn block_text(block: &Handle) -> String {
    let editable = find_descendant(block, &|n| {
        attr(n, "contenteditable").as_deref() == Some("true")
    })
    .or_else(|| find_descendant(block, &|n| attr(n, "data-content-editable-leaf").is_some()))
    .or_else(|| find_descendant(block, &|n| attr(n, "placeholder").is_some()));
    match editable {
        Some(node) => format_inline(&node),
        None => text_without_nested(block),
    }
}

/// Last-resort block text: every editable descendant joined, then the
/// flattened block.
pub fn block_text_aggressive(block: &Handle) -> String {
    let standard = block_text(block);
    if !standard.trim().is_empty() {
        return standard;
    }
    let editables = descendants_where(block, &|n| attr(n, "contenteditable").is_some());
    let texts: Vec<String> = editables
        .iter()
        .map(text_content)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if !texts.is_empty() {
        return texts.join(" ");
    }
    text_without_nested(block)
}

fn text_without_nested(block: &Handle) -> String {
    match clone_without(block, &|n| {
        !Rc::ptr_eq(n, block) && attr(n, IDENTITY_ATTR).is_some()
    }) {
        Some(clone) => text_content(&clone).trim().to_string(),
        None => String::new(),
    }
}
