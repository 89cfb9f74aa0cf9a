//! Plain-text fallback, the last strategy
//!
//! The selection's flattened text through the pattern reconstructor.
//! Nothing structural survives to here, so this is pure text repair.

use super::ExtractionStrategy;
use crate::dom::Page;
use crate::reconstruct::reconstruct;
use crate::selection::Selection;

pub struct PlainTextFallback;

impl ExtractionStrategy for PlainTextFallback {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn extract(&self, page: &Page, selection: &Selection) -> Option<String> {
        let text = selection.flattened_text(&page.document());
        if text.trim().is_empty() {
            None
        } else {
            Some(reconstruct(&text))
        }
    }
}
