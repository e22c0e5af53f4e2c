//! Mock session validator for testing.
//!
//! Implements the `SessionValidator` port without a real identity provider.
//!
//! # Example
//!
//! ```ignore
//! use ghibli_art::adapters::auth::MockSessionValidator;
//! use ghibli_art::domain::foundation::Identity;
//!
//! let validator = MockSessionValidator::new()
//!     .with_identity("valid-token", Identity::new("user-123").with_email("test@example.com"));
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to identities. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated identities
    tokens: RwLock<HashMap<String, Identity>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    fn tokens(&self) -> RwLockReadGuard<'_, HashMap<String, Identity>> {
        self.tokens.read().unwrap_or_else(|p| p.into_inner())
    }

    fn tokens_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, Identity>> {
        self.tokens.write().unwrap_or_else(|p| p.into_inner())
    }

    fn forced_error_mut(&self) -> RwLockWriteGuard<'_, Option<AuthError>> {
        self.force_error.write().unwrap_or_else(|p| p.into_inner())
    }

    /// Adds a valid token that maps to an identity.
    pub fn with_identity(self, token: impl Into<String>, identity: Identity) -> Self {
        self.tokens_mut().insert(token.into(), identity);
        self
    }

    /// Adds a valid token with a simple test identity.
    pub fn with_test_user(self, token: impl Into<String>, subject: impl Into<String>) -> Self {
        let subject = subject.into();
        let identity = Identity::new(&subject)
            .with_email(format!("{}@test.example.com", subject))
            .with_name(format!("Test User {}", subject));
        self.with_identity(token, identity)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.forced_error_mut() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.forced_error_mut() = None;
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, identity: Identity) {
        self.tokens_mut().insert(token.into(), identity);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens_mut().remove(token);
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens().len()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let forced = self
            .force_error
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(error) = forced {
            return Err(error);
        }

        self.tokens()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
