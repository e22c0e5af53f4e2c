//! Authentication types for the domain layer.
//!
//! These types represent a signed-in user as resolved by the external identity
//! provider. They have **no external dependencies** - any OIDC provider can
//! populate them via the `SessionValidator` port.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let identity = Identity::new("google-oauth2|1234")
//!     .with_email("user@example.com")
//!     .with_name("Alice");
//!
//! request.extensions_mut().insert(identity);
//! ```

use thiserror::Error;

/// Signed-in user extracted from a validated session token.
///
/// Only the subject is guaranteed; profile claims are optional because
/// providers differ in which scopes they release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Stable subject identifier from the identity provider.
    pub subject: String,

    /// Email address, if released by the provider.
    pub email: Option<String>,

    /// Display name (`name` or `preferred_username` claim).
    pub name: Option<String>,

    /// Avatar URL (`picture` claim).
    pub image: Option<String>,
}

impl Identity {
    /// Creates an identity with only a subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: None,
            name: None,
            image: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Authentication errors that can occur during token validation.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the identity provider's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is malformed or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The identity provider is unavailable (network, JWKS, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the caller should simply be treated as signed out.
    pub fn is_anonymous_fallback(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
