//! OpenAI image provider - implementation of `ImageGenerator` for the
//! OpenAI image edits endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIImageConfig::new(api_key)
//!     .with_model("gpt-image-1")
//!     .with_size("1024x1024");
//!
//! let provider = OpenAIImageProvider::new(config)?;
//! ```
//!
//! The reference photo is sent as a multipart `image` part together with the
//! prompt. The API answers with either a hosted `url` or inline `b64_json`;
//! both are folded into [`ImageResult`] here.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::generation::{ImageResult, ImageUpload};
use crate::ports::{GenerationError, ImageGenerator, ProviderInfo};

/// MIME type of inline results; the edits endpoint returns PNG by default.
const INLINE_RESULT_MIME: &str = "image/png";

/// Configuration for the OpenAI image provider.
#[derive(Debug, Clone)]
pub struct OpenAIImageConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Output size, e.g. "1024x1024".
    pub size: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIImageConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-image-1".to_string(),
            size: "1024x1024".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the output image size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI image edits provider.
pub struct OpenAIImageProvider {
    config: OpenAIImageConfig,
    client: Client,
}

impl OpenAIImageProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenAIImageConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::unavailable(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { config, client })
    }

    fn edits_url(&self) -> String {
        format!("{}/images/edits", self.config.base_url)
    }

    fn build_form(&self, image: &ImageUpload, prompt: &str) -> Result<Form, GenerationError> {
        let file_name = image
            .file_name
            .clone()
            .unwrap_or_else(|| default_file_name(&image.mime_type));

        let part = Part::bytes(image.bytes.clone())
            .file_name(file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| GenerationError::InvalidRequest(format!("Unusable MIME type: {}", e)))?;

        Ok(Form::new()
            .text("model", self.config.model.clone())
            .text("prompt", prompt.to_string())
            .text("size", self.config.size.clone())
            .text("n", "1")
            .part("image", part))
    }

    /// Maps a non-success HTTP status to a `GenerationError`.
    async fn handle_response_status(&self, response: Response) -> Result<Response, GenerationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(map_error_status(status.as_u16(), &error_body))
    }

    async fn parse_response(&self, response: Response) -> Result<ImageResult, GenerationError> {
        let response = self.handle_response_status(response).await?;

        let body: ImagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::malformed(format!("Failed to parse response: {}", e)))?;

        body.into_image_result()
    }
}

#[async_trait]
impl ImageGenerator for OpenAIImageProvider {
    async fn generate(
        &self,
        image: &ImageUpload,
        prompt: &str,
    ) -> Result<ImageResult, GenerationError> {
        let form = self.build_form(image, prompt)?;

        let response = self
            .client
            .post(self.edits_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    GenerationError::network(format!("Connection failed: {}", e))
                } else {
                    GenerationError::network(e.to_string())
                }
            })?;

        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", self.config.model.clone())
    }
}

fn default_file_name(mime_type: &str) -> String {
    let extension = mime_type
        .strip_prefix("image/")
        .filter(|ext| !ext.is_empty())
        .unwrap_or("png");
    format!("upload.{}", extension)
}

fn map_error_status(status: u16, error_body: &str) -> GenerationError {
    let detail = serde_json::from_str::<ErrorResponse>(error_body).ok();
    let message = detail
        .as_ref()
        .map(|d| d.error.message.clone())
        .unwrap_or_else(|| error_body.to_string());
    let code = detail.and_then(|d| d.error.code).unwrap_or_default();

    match status {
        401 => GenerationError::AuthenticationFailed,
        429 => GenerationError::RateLimited,
        400 if code == "moderation_blocked" || code == "content_policy_violation" => {
            GenerationError::ContentRejected(message)
        }
        400 => GenerationError::InvalidRequest(message),
        500..=599 => GenerationError::unavailable(format!("Server error {}: {}", status, message)),
        _ => GenerationError::network(format!("Unexpected status {}: {}", status, message)),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
    b64_json: Option<String>,
}

impl ImagesResponse {
    fn into_image_result(self) -> Result<ImageResult, GenerationError> {
        let first = self
            .data
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::malformed("No image returned"))?;

        if let Some(encoded) = first.b64_json.filter(|s| !s.is_empty()) {
            let bytes = STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| GenerationError::malformed(format!("Invalid base64 image: {}", e)))?;
            return Ok(ImageResult::InlineData {
                bytes,
                mime_type: INLINE_RESULT_MIME.to_string(),
            });
        }

        match first.url.filter(|s| !s.is_empty()) {
            Some(url) => Ok(ImageResult::Url(url)),
            None => Err(GenerationError::malformed("No image URL returned")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
    code: Option<String>,
}
