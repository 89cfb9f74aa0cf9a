//! Error types for extraction operations

use std::fmt;

/// Errors that can occur during extraction operations
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Error while parsing input HTML
    ParseError(String),
    /// A block id referenced by the caller does not exist in the page
    NodeNotFound(String),
    /// The operation requires non-empty content
    EmptyContent(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ExtractError::NodeNotFound(id) => write!(f, "Block '{id}' not found"),
            ExtractError::EmptyContent(msg) => write!(f, "Empty content: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::ParseError(err.to_string())
    }
}
