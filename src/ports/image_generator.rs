//! Image generator port for external stylization providers.
//!
//! The provider receives the caller's photo plus a prompt and returns a
//! single image. Providers answer either with a hosted URL or with inline
//! bytes; adapters fold both into [`ImageResult`] so callers never inspect
//! provider-specific response shapes.
//!
//! Adapters perform exactly one provider round trip per call. The bounded
//! retry with a fallback prompt lives in the application layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::generation::{ImageResult, ImageUpload};

/// Port for image generation providers.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates one image from a reference photo and a prompt.
    async fn generate(&self, image: &ImageUpload, prompt: &str)
        -> Result<ImageResult, GenerationError>;

    /// Identifies the provider and model for logging.
    fn provider_info(&self) -> ProviderInfo;
}

/// Provider and model identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Errors from image generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Rate limited by provider.
    #[error("rate limited by provider")]
    RateLimited,

    /// Prompt or image rejected by provider safety filters.
    #[error("content rejected: {0}")]
    ContentRejected(String),

    /// Provider refused the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider is unavailable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Provider answered without a usable image.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
