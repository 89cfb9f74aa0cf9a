//! Appending generated images to a Notion page.
//!
//! One operation: PATCH an external-URL image block under a parent block.
//! The service does not accept raw image bytes, so inline images must be
//! hosted somewhere first; passing one is a client-side error.

use serde::{Deserialize, Serialize};

use crate::error::{api_error, ClientError, Result};
use crate::gemini::GeneratedImage;

/// Default API base for the document service.
pub const DEFAULT_API_BASE: &str = "https://api.notion.com/v1";

/// Wire-format version pinned by the `Notion-Version` header.
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Serialize)]
struct AppendChildrenRequest {
    children: Vec<BlockPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<String>,
}

#[derive(Debug, Serialize)]
struct BlockPayload {
    object: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    image: ImagePayload,
}

#[derive(Debug, Serialize)]
struct ImagePayload {
    #[serde(rename = "type")]
    kind: &'static str,
    external: ExternalFile,
}

#[derive(Debug, Serialize)]
struct ExternalFile {
    url: String,
}

impl AppendChildrenRequest {
    fn image(url: &str, after: Option<&str>) -> Self {
        Self {
            children: vec![BlockPayload {
                object: "block",
                kind: "image",
                image: ImagePayload {
                    kind: "external",
                    external: ExternalFile {
                        url: url.to_string(),
                    },
                },
            }],
            after: after.map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AppendChildrenResponse {
    #[serde(default)]
    results: Vec<AppendedBlock>,
}

#[derive(Debug, Deserialize)]
struct AppendedBlock {
    id: String,
}

/// Blocking client for appending blocks to a page.
pub struct DocumentClient {
    http: reqwest::blocking::Client,
    api_base: String,
    token: String,
}

impl DocumentClient {
    /// Create a client authenticating with the given integration token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at a different API base.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Append `image` under `parent_id`, optionally after an anchor block.
    ///
    /// Returns the id of the appended block.
    pub fn append_image(
        &self,
        parent_id: &str,
        image: &GeneratedImage,
        after: Option<&str>,
    ) -> Result<String> {
        if self.token.trim().is_empty() {
            return Err(ClientError::MissingCredential("notion_api_key".to_string()));
        }

        let url = match image {
            GeneratedImage::Remote { uri } => uri,
            GeneratedImage::Inline { .. } => return Err(ClientError::UnsupportedImageReference),
        };

        let endpoint = format!("{}/blocks/{}/children", self.api_base, parent_id);
        let body = AppendChildrenRequest::image(url, after);

        log::debug!("Appending image block under {parent_id}");
        let response = self
            .http
            .patch(&endpoint)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()?;
        let status = response.status();
        let text = response.text()?;
        log::debug!("Document service answered HTTP {status}");

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }

        appended_block_id(&text)
    }
}

/// Pull the appended block's id out of an append-children response body.
pub fn appended_block_id(body: &str) -> Result<String> {
    let parsed: AppendChildrenResponse = serde_json::from_str(body).map_err(|e| {
        ClientError::MalformedResponse(format!("unparseable append response: {e}"))
    })?;

    parsed
        .results
        .first()
        .map(|block| block.id.clone())
        .ok_or_else(|| {
            ClientError::MalformedResponse(format!("no appended block in response: {body}"))
        })
}
