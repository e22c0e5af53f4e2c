//! Session validation port for the external identity provider.
//!
//! The sign-in flow itself (OAuth redirects, consent, token issuance) is run
//! by the identity provider. This service only receives the resulting token
//! and asks a `SessionValidator` who it belongs to.
//!
//! # Security Requirements
//!
//! All implementations MUST validate:
//! - **Issuer (iss)**: Token must come from the expected provider
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};

/// Validates session tokens and extracts the caller's identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without any "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<Identity, AuthError>;
}
