//! Error types for the remote clients.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the remote services.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    /// A required credential is empty or unset.
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A success response that does not carry what was asked for.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Inline image bytes cannot be appended; the service only accepts URLs.
    #[error("inline image data cannot be appended directly; host the bytes and pass a URL")]
    UnsupportedImageReference,
}

/// Best-effort decode of an error payload into a structured API error.
///
/// Tries `{"error": {"message": ...}}` first, then a top-level `"message"`,
/// and falls back to the raw body when neither is present.
pub(crate) fn api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .or_else(|| value.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    ClientError::Api { status, message }
}
