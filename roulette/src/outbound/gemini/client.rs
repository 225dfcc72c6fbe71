//! Reqwest-backed client for the Gemini `generateContent` REST endpoint.
//!
//! The client owns transport details only: URL construction, the API key
//! header, optional structured-output configuration, and HTTP error mapping.
//! Prompt wording and payload validation belong to the adapters built on it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::dto::{
    ContentDto, GenerateContentRequestDto, GenerateContentResponseDto, GenerationConfigDto,
    PartDto,
};

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

/// One prompt sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// User prompt text.
    pub prompt: String,
    /// Schema the JSON answer must follow. `None` asks for free text.
    pub response_schema: Option<Value>,
}

impl GenerationRequest {
    /// Free-text request.
    #[must_use]
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    /// Request for a JSON answer following `schema`.
    #[must_use]
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// Failures of one model call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response.
    #[error("model transport failed: {message}")]
    Transport {
        /// Underlying client error.
        message: String,
    },
    /// The endpoint answered with a non-success status.
    #[error("model returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Compacted start of the response body.
        body: String,
    },
    /// The prompt or the answer was blocked.
    #[error("model blocked the request: {reason}")]
    Blocked {
        /// Block or finish reason reported by the model.
        reason: String,
    },
    /// The response held no candidate.
    #[error("model returned no candidates")]
    NoCandidates,
    /// The response body did not match the expected shape.
    #[error("model response could not be decoded: {message}")]
    Decode {
        /// Decoder error.
        message: String,
    },
}

/// Port over the text generation capability shared by the Gemini adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Run one prompt and return the answer text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Failures building a [`GeminiClient`].
#[derive(Debug, thiserror::Error)]
pub enum GeminiClientBuildError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The endpoint and model do not form a valid URL.
    #[error("invalid model endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Gemini client bound to one endpoint, model, and API key.
pub struct GeminiClient {
    client: Client,
    generate_url: Url,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client. `timeout` bounds each call; `None` leaves calls
    /// unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// endpoint cannot be joined with the model path.
    pub fn new(
        endpoint: &Url,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GeminiClientBuildError> {
        let model = model.into();
        let generate_url = generate_url(endpoint, &model)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            generate_url,
            model,
            api_key: api_key.into(),
        })
    }

    /// Model name the client calls.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

fn generate_url(endpoint: &Url, model: &str) -> Result<Url, url::ParseError> {
    let mut base = endpoint.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("v1beta/models/{model}:generateContent"))
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = GenerateContentRequestDto {
            contents: vec![ContentDto {
                role: "user",
                parts: vec![PartDto {
                    text: &request.prompt,
                }],
            }],
            generation_config: request.response_schema.as_ref().map(|schema| {
                GenerationConfigDto {
                    response_mime_type: JSON_MIME_TYPE,
                    response_schema: schema,
                }
            }),
        };
        debug!(
            model = %self.model,
            prompt_chars = request.prompt.chars().count(),
            structured = request.response_schema.is_some(),
            "calling generateContent"
        );

        let response = self
            .client
            .post(self.generate_url.clone())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }

        let decoded: GenerateContentResponseDto =
            serde_json::from_slice(bytes.as_ref()).map_err(|error| GenerationError::Decode {
                message: error.to_string(),
            })?;
        decoded.into_text()
    }
}

fn map_transport_error(error: reqwest::Error) -> GenerationError {
    GenerationError::Transport {
        message: error.without_url().to_string(),
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GenerationError {
    GenerationError::Status {
        status: status.as_u16(),
        body: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
