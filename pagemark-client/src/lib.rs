//! # pagemark-client
//!
//! HTTP clients for the remote halves of the pagemark toolchain:
//! - Image generation via the Gemini `generateContent` endpoint
//! - Appending generated images to a Notion page
//!
//! Both clients are blocking and deliberately thin: compose a prompt with
//! `pagemark-core`, hand it to [`ImageGenerationClient::generate`], then pass
//! the result to [`DocumentClient::append_image`]. Response decoding lives in
//! pure functions ([`gemini::image_from_response`],
//! [`notion::appended_block_id`]) so the wire formats can be tested with
//! canned JSON and no network.

pub mod error;
pub mod gemini;
pub mod notion;

pub use error::{ClientError, Result};
pub use gemini::{GeneratedImage, ImageGenerationClient};
pub use notion::DocumentClient;
