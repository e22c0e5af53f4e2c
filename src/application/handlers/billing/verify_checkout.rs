//! VerifyCheckoutHandler - Query handler for checkout completion.
//!
//! Read-only against the payment provider, so repeating it for the same
//! session always yields the same answer.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::{PaymentError, PaymentProvider};

/// Query to verify a checkout session.
#[derive(Debug, Clone, Default)]
pub struct VerifyCheckoutQuery {
    pub session_id: Option<String>,
}

/// Result of checkout verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyCheckoutResult {
    /// Paid and complete; the caller should activate the subscription.
    pub subscription_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyCheckoutError {
    #[error("Missing session_id")]
    MissingSessionId,

    #[error("Failed to verify session: {0}")]
    Provider(#[from] PaymentError),
}

/// Handler for verifying checkout sessions.
pub struct VerifyCheckoutHandler {
    provider: Arc<dyn PaymentProvider>,
}

impl VerifyCheckoutHandler {
    pub fn new(provider: Arc<dyn PaymentProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        query: VerifyCheckoutQuery,
    ) -> Result<VerifyCheckoutResult, VerifyCheckoutError> {
        let session_id = query
            .session_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(VerifyCheckoutError::MissingSessionId)?;

        let status = self
            .provider
            .retrieve_checkout_session(session_id)
            .await
            .map_err(|e| {
                tracing::error!(session_id, error = %e, "Checkout verification failed");
                VerifyCheckoutError::Provider(e)
            })?;

        let subscription_active = status.is_completed();
        tracing::info!(
            session_id,
            subscription_active,
            payment_status = ?status.payment_status,
            status = ?status.status,
            "Checkout session verified"
        );

        Ok(VerifyCheckoutResult {
            subscription_active,
        })
    }
}
