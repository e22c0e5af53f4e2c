//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GHIBLI_ART` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ghibli_art::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod auth;
mod cookies;
mod error;
mod payment;
mod server;
mod upload;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use cookies::CookieConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};
pub use upload::UploadConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, public URL)
    #[serde(default)]
    pub server: ServerConfig,

    /// Identity provider configuration (OIDC)
    pub auth: AuthConfig,

    /// Image generation provider configuration (OpenAI)
    pub ai: AiConfig,

    /// Payment configuration (Stripe)
    pub payment: PaymentConfig,

    /// Entitlement cookie signing
    pub cookies: CookieConfig,

    /// Upload limits
    #[serde(default)]
    pub upload: UploadConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GHIBLI_ART` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GHIBLI_ART__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `GHIBLI_ART__PAYMENT__STRIPE_PRICE_ID=...` -> `payment.stripe_price_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GHIBLI_ART")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate()?;
        self.payment.validate()?;
        self.cookies.validate()?;
        self.upload.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const SECRET: &str =
        "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn set_minimal_env() {
        env::set_var("GHIBLI_ART__AUTH__OIDC_ISSUER", "https://accounts.example.com");
        env::set_var("GHIBLI_ART__AUTH__OIDC_AUDIENCE", "ghibli-art");
        env::set_var("GHIBLI_ART__AI__OPENAI_API_KEY", "sk-test-xxx");
        env::set_var("GHIBLI_ART__PAYMENT__STRIPE_API_KEY", "sk_test_xxx");
        env::set_var("GHIBLI_ART__PAYMENT__STRIPE_PRICE_ID", "price_123");
        env::set_var("GHIBLI_ART__COOKIES__SECRET", SECRET);
    }

    fn clear_env() {
        for key in [
            "GHIBLI_ART__AUTH__OIDC_ISSUER",
            "GHIBLI_ART__AUTH__OIDC_AUDIENCE",
            "GHIBLI_ART__AI__OPENAI_API_KEY",
            "GHIBLI_ART__PAYMENT__STRIPE_API_KEY",
            "GHIBLI_ART__PAYMENT__STRIPE_PRICE_ID",
            "GHIBLI_ART__COOKIES__SECRET",
            "GHIBLI_ART__SERVER__PORT",
            "GHIBLI_ART__SERVER__ENVIRONMENT",
            "GHIBLI_ART__UPLOAD__MAX_IMAGE_BYTES",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.payment.stripe_price_id, "price_123");
        assert_eq!(config.auth.oidc_audience, "ghibli-art");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok(), "{:?}", config.validate().err());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.upload.max_image_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GHIBLI_ART__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_upload_ceiling() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GHIBLI_ART__UPLOAD__MAX_IMAGE_BYTES", "10485760");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.upload.max_image_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_missing_section_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
