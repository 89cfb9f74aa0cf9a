//! Block role classification
//!
//! The host editor never says what a block is. Kind is conveyed by
//! class-name fragments (`header`, `bulleted_list`, `to_do`, ...), and when
//! those are absent, by structural traces: list-style values in inline
//! styles, checkbox descendants. Classification is an ordered rule table;
//! the first rule that recognizes the block decides, and anything
//! unrecognized is a paragraph.
//!
//! Order matters in two places. Level tokens are probed longest first
//! because `sub-sub-header` contains `sub-header` as a substring, and the
//! heading rule precedes the quote rule so a block classed `header quote`
//! is a heading.

use crate::dom::{attr, class_contains, class_has_token, find_descendant, style_contains, tag_name};
use markup5ever_rcdom::Handle;
use serde::Serialize;

/// The structural role a block plays in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockRole {
    Heading1,
    Heading2,
    Heading3,
    BulletItem,
    NumberedItem,
    TodoItem { checked: bool },
    Quote,
    Callout,
    CodeBlock,
    Toggle,
    Paragraph,
}

impl BlockRole {
    /// Stable lowercase name, for reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            BlockRole::Heading1 => "heading_1",
            BlockRole::Heading2 => "heading_2",
            BlockRole::Heading3 => "heading_3",
            BlockRole::BulletItem => "bullet_item",
            BlockRole::NumberedItem => "numbered_item",
            BlockRole::TodoItem { .. } => "todo_item",
            BlockRole::Quote => "quote",
            BlockRole::Callout => "callout",
            BlockRole::CodeBlock => "code_block",
            BlockRole::Toggle => "toggle",
            BlockRole::Paragraph => "paragraph",
        }
    }
}

/// One classification rule: a name for diagnostics and a recognizer.
pub struct ClassifyRule {
    pub name: &'static str,
    pub apply: fn(&Handle) -> Option<BlockRole>,
}

/// The classification table, probed in order.
pub const CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule {
        name: "heading-class",
        apply: heading_rule,
    },
    ClassifyRule {
        name: "bulleted-class",
        apply: bulleted_rule,
    },
    ClassifyRule {
        name: "numbered-class",
        apply: numbered_rule,
    },
    ClassifyRule {
        name: "todo-class",
        apply: todo_rule,
    },
    ClassifyRule {
        name: "quote-class",
        apply: quote_rule,
    },
    ClassifyRule {
        name: "callout-class",
        apply: callout_rule,
    },
    ClassifyRule {
        name: "code-class",
        apply: code_rule,
    },
    ClassifyRule {
        name: "toggle-class",
        apply: toggle_rule,
    },
    ClassifyRule {
        name: "list-style-bullet",
        apply: structural_bullet_rule,
    },
    ClassifyRule {
        name: "list-style-number",
        apply: structural_number_rule,
    },
    ClassifyRule {
        name: "checkbox-descendant",
        apply: structural_todo_rule,
    },
];

/// Classify a block element. Total; falls back to `Paragraph`.
pub fn classify_block(block: &Handle) -> BlockRole {
    for rule in CLASSIFY_RULES {
        if let Some(role) = (rule.apply)(block) {
            return role;
        }
    }
    BlockRole::Paragraph
}

fn heading_rule(block: &Handle) -> Option<BlockRole> {
    if !class_contains(block, "header") && !class_contains(block, "heading") {
        return None;
    }
    const LEVEL3: &[&str] = &["sub_sub", "heading_3", "sub-sub-header"];
    const LEVEL2: &[&str] = &["sub_header", "heading_2", "sub-header"];
    if LEVEL3.iter().any(|t| class_contains(block, t)) {
        return Some(BlockRole::Heading3);
    }
    if LEVEL2.iter().any(|t| class_contains(block, t)) {
        return Some(BlockRole::Heading2);
    }
    Some(BlockRole::Heading1)
}

fn bulleted_rule(block: &Handle) -> Option<BlockRole> {
    if class_contains(block, "bulleted_list") || class_contains(block, "bulleted-list") {
        Some(BlockRole::BulletItem)
    } else {
        None
    }
}

fn numbered_rule(block: &Handle) -> Option<BlockRole> {
    if class_contains(block, "numbered_list") || class_contains(block, "numbered-list") {
        Some(BlockRole::NumberedItem)
    } else {
        None
    }
}

fn todo_rule(block: &Handle) -> Option<BlockRole> {
    if class_contains(block, "to_do") || class_contains(block, "to-do") || class_contains(block, "todo")
    {
        Some(BlockRole::TodoItem {
            checked: todo_checked(block),
        })
    } else {
        None
    }
}

fn quote_rule(block: &Handle) -> Option<BlockRole> {
    class_contains(block, "quote").then_some(BlockRole::Quote)
}

fn callout_rule(block: &Handle) -> Option<BlockRole> {
    class_contains(block, "callout").then_some(BlockRole::Callout)
}

fn code_rule(block: &Handle) -> Option<BlockRole> {
    class_contains(block, "code").then_some(BlockRole::CodeBlock)
}

fn toggle_rule(block: &Handle) -> Option<BlockRole> {
    class_contains(block, "toggle").then_some(BlockRole::Toggle)
}

fn structural_bullet_rule(block: &Handle) -> Option<BlockRole> {
    let marked = find_descendant(block, &|n| {
        style_contains(n, "disc") || style_contains(n, "circle") || style_contains(n, "square")
    });
    marked.map(|_| BlockRole::BulletItem)
}

fn structural_number_rule(block: &Handle) -> Option<BlockRole> {
    let marked = find_descendant(block, &|n| {
        style_contains(n, "decimal") || style_contains(n, "list-style-type")
    });
    marked.map(|_| BlockRole::NumberedItem)
}

fn structural_todo_rule(block: &Handle) -> Option<BlockRole> {
    find_descendant(block, &is_checkbox).map(|_| BlockRole::TodoItem {
        checked: todo_checked(block),
    })
}

/// Checkbox recognizers: ARIA role, native input, or a checkbox class.
fn is_checkbox(node: &Handle) -> bool {
    if attr(node, "role").as_deref() == Some("checkbox") {
        return true;
    }
    if tag_name(node) == Some("input") && attr(node, "type").as_deref() == Some("checkbox") {
        return true;
    }
    class_contains(node, "checkbox")
}

/// Checked state for a to-do block. Probes the checkbox descendant first
/// (ARIA state, native checked attribute, a `checked` class token), then
/// the block's own class list. Token equality, not substring: `unchecked`
/// must not read as checked.
fn todo_checked(block: &Handle) -> bool {
    if let Some(checkbox) = find_descendant(block, &is_checkbox) {
        if attr(&checkbox, "aria-checked").as_deref() == Some("true") {
            return true;
        }
        if tag_name(&checkbox) == Some("input") && attr(&checkbox, "checked").is_some() {
            return true;
        }
        if class_has_token(&checkbox, "checked") {
            return true;
        }
    }
    class_has_token(block, "checked")
}
