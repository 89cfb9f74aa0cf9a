//! Prompt composition for image generation
//!
//! The extracted Markdown becomes the `[CONTENT]` of the generation
//! prompt, optionally framed by a named style. The framing format is part
//! of the product contract with the generation model and is not
//! configurable.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// A named style preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub prompt: String,
}

impl Preset {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Preset {
            name: name.into(),
            prompt: prompt.into(),
        }
    }
}

/// Compose the generation prompt.
///
/// Without a style the content is the prompt. With a style, the two are
/// framed as `[STYLE]:` and `[CONTENT]:` sections. Whitespace-only style
/// or content is rejected rather than silently composing an empty frame.
pub fn compose_prompt(style: Option<&str>, content: &str) -> Result<String, ExtractError> {
    if content.trim().is_empty() {
        return Err(ExtractError::EmptyContent(
            "no content to compose a prompt from".to_string(),
        ));
    }
    match style {
        None => Ok(content.to_string()),
        Some(style) => {
            let style = style.trim();
            if style.is_empty() {
                return Err(ExtractError::EmptyContent("style text is empty".to_string()));
            }
            Ok(format!("[STYLE]: {style}\n\n[CONTENT]:\n{content}"))
        }
    }
}
