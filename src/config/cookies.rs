//! Entitlement cookie signing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Minimum signing secret length accepted by `axum_extra::extract::cookie::Key`.
pub const MIN_COOKIE_SECRET_BYTES: usize = 64;

/// Cookie configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CookieConfig {
    /// Secret used to sign the `trial_used` and `subscription_active` cookies
    pub secret: String,
}

impl CookieConfig {
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    /// Validate cookie configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret.is_empty() {
            return Err(ValidationError::MissingRequired("COOKIES_SECRET"));
        }
        if self.secret.len() < MIN_COOKIE_SECRET_BYTES {
            return Err(ValidationError::CookieSecretTooShort(MIN_COOKIE_SECRET_BYTES));
        }
        Ok(())
    }
}
