//! Image generation over the Gemini `generateContent` endpoint.
//!
//! The client is blocking and single-shot: one prompt in, one image out, no
//! retry. Response decoding is a pure function ([`image_from_response`]) so
//! the wire format can be exercised with canned JSON.

use serde::{Deserialize, Serialize};

use crate::error::{api_error, ClientError, Result};

/// Default API base for the generation service.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default image-capable model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default nucleus-sampling cutoff.
pub const DEFAULT_TOP_P: f64 = 0.95;

/// MIME type assumed when the service omits one on inline data.
const FALLBACK_MIME: &str = "image/jpeg";

/// An image returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Base64 bytes delivered inline with the response.
    Inline {
        mime_type: String,
        data_base64: String,
    },
    /// A URI the service uploaded the image to.
    Remote { uri: String },
}

impl GeneratedImage {
    /// Render the image as an `img`-ready source string.
    ///
    /// Inline images become `data:` URLs; remote images pass their URI
    /// through unchanged.
    pub fn source_url(&self) -> String {
        match self {
            GeneratedImage::Inline {
                mime_type,
                data_base64,
            } => format!("data:{mime_type};base64,{data_base64}"),
            GeneratedImage::Remote { uri } => uri.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationSettings,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings {
    response_modalities: Vec<&'static str>,
    temperature: f64,
    top_p: f64,
}

impl GenerateContentRequest {
    fn for_prompt(prompt: &str, temperature: f64, top_p: f64) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationSettings {
                response_modalities: vec!["IMAGE"],
                temperature,
                top_p,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
    file_data: Option<FileData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileData {
    file_uri: Option<String>,
}

/// Blocking client for the image generation endpoint.
pub struct ImageGenerationClient {
    http: reqwest::blocking::Client,
    api_base: String,
    model: String,
    api_key: String,
    temperature: f64,
    top_p: f64,
}

impl ImageGenerationClient {
    /// Create a client with the default endpoint, model, and sampling.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }

    /// Point the client at a different API base.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the sampling parameters.
    pub fn with_sampling(mut self, temperature: f64, top_p: f64) -> Self {
        self.temperature = temperature;
        self.top_p = top_p;
        self
    }

    /// Generate one image from a composed prompt.
    pub fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::MissingCredential("gemini_api_key".to_string()));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );
        let body = GenerateContentRequest::for_prompt(prompt, self.temperature, self.top_p);

        log::debug!("Requesting image generation from model {}", self.model);
        let response = self.http.post(&url).json(&body).send()?;
        let status = response.status();
        let text = response.text()?;
        log::debug!("Generation service answered HTTP {status}");

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }

        image_from_response(&text)
    }
}

/// Pull the first usable image out of a `generateContent` response body.
///
/// Only the first candidate is consulted. Inline data is preferred over a
/// file URI; a part carrying `inlineData` without `data` is skipped.
pub fn image_from_response(body: &str) -> Result<GeneratedImage> {
    let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        ClientError::MalformedResponse(format!("unparseable generation response: {e}"))
    })?;

    let parts = parsed
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or(&[]);

    let inline = parts.iter().find_map(|part| {
        let inline = part.inline_data.as_ref()?;
        let data = inline.data.as_ref()?;
        Some(GeneratedImage::Inline {
            mime_type: inline
                .mime_type
                .clone()
                .unwrap_or_else(|| FALLBACK_MIME.to_string()),
            data_base64: data.clone(),
        })
    });
    if let Some(image) = inline {
        return Ok(image);
    }

    let remote = parts.iter().find_map(|part| {
        let uri = part.file_data.as_ref()?.file_uri.as_ref()?;
        Some(GeneratedImage::Remote { uri: uri.clone() })
    });
    if let Some(image) = remote {
        return Ok(image);
    }

    Err(ClientError::MalformedResponse(format!(
        "no image in generation response: {body}"
    )))
}
