//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid URL for {0}")]
    InvalidUrl(&'static str),

    #[error("{0} must use HTTPS in production")]
    MustBeHttps(&'static str),

    #[error("Invalid Stripe API key format")]
    InvalidStripeKey,

    #[error("Invalid Stripe price ID format")]
    InvalidStripePriceId,

    #[error("Invalid OpenAI API key format")]
    InvalidOpenAiKey,

    #[error("Invalid AI request timeout")]
    InvalidTimeout,

    #[error("Cookie secret must be at least {0} bytes")]
    CookieSecretTooShort(usize),

    #[error("Upload ceiling must be between 1 byte and {0} bytes")]
    InvalidUploadCeiling(usize),
}
