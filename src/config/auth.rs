//! Authentication configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (OIDC identity provider)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Issuer URL; JWKS is fetched from `{issuer}/.well-known/jwks.json`
    pub oidc_issuer: String,

    /// Expected audience for tokens
    pub oidc_audience: String,

    /// Cookie carrying the session token when no bearer header is sent
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// JWKS cache TTL in seconds
    #[serde(default = "default_jwks_cache_ttl")]
    pub jwks_cache_ttl_secs: u64,
}

impl AuthConfig {
    /// Get JWKS cache TTL as Duration
    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production, requires HTTPS for the issuer URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.oidc_issuer.is_empty() {
            return Err(ValidationError::MissingRequired("OIDC_ISSUER"));
        }
        if self.oidc_audience.is_empty() {
            return Err(ValidationError::MissingRequired("OIDC_AUDIENCE"));
        }
        if self.session_cookie.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_COOKIE"));
        }

        if *environment == Environment::Production && !self.oidc_issuer.starts_with("https://") {
            return Err(ValidationError::MustBeHttps("OIDC_ISSUER"));
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            oidc_issuer: String::new(),
            oidc_audience: String::new(),
            session_cookie: default_session_cookie(),
            jwks_cache_ttl_secs: default_jwks_cache_ttl(),
        }
    }
}

fn default_session_cookie() -> String {
    "session_token".to_string()
}

fn default_jwks_cache_ttl() -> u64 {
    3600
}
