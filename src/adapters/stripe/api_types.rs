//! Stripe API response payloads.
//!
//! Only the fields this service reads are modelled; Stripe adds fields
//! freely, so unknown keys are ignored.

use serde::Deserialize;

use crate::ports::{CheckoutSessionStatus, CheckoutState, PaymentError, PaymentErrorCode, PaymentStatus};

/// Checkout session object as returned by `/v1/checkout/sessions`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeCheckoutSession {
    /// Unique session identifier (cs_...).
    pub id: String,

    /// Hosted checkout page. Null once the session is complete or expired.
    pub url: Option<String>,

    /// Session payment status (paid, unpaid, no_payment_required).
    #[serde(default)]
    pub payment_status: String,

    /// Session status (open, complete, expired). Null on very old API versions.
    pub status: Option<String>,

    /// Payment mode (payment, setup, subscription).
    #[serde(default)]
    pub mode: String,
}

impl StripeCheckoutSession {
    pub fn to_status(&self) -> CheckoutSessionStatus {
        CheckoutSessionStatus {
            id: self.id.clone(),
            payment_status: PaymentStatus::parse(&self.payment_status),
            status: CheckoutState::parse(self.status.as_deref().unwrap_or_default()),
        }
    }
}

/// Error envelope: `{ "error": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeApiError,
}

/// Stripe API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeApiError {
    /// Error category (api_error, invalid_request_error, ...).
    #[serde(rename = "type")]
    pub error_type: String,

    /// Short machine-readable code, when Stripe provides one.
    pub code: Option<String>,

    /// Human-readable message.
    pub message: Option<String>,
}

impl StripeApiError {
    /// Convert to a port error, using the HTTP status to pick the category.
    pub fn into_payment_error(self, status: u16) -> PaymentError {
        let code = match status {
            401 | 403 => PaymentErrorCode::AuthenticationError,
            404 => PaymentErrorCode::NotFound,
            429 => PaymentErrorCode::RateLimitExceeded,
            _ => PaymentErrorCode::ProviderError,
        };
        let message = self
            .message
            .unwrap_or_else(|| format!("Stripe {} ({})", self.error_type, status));

        let error = PaymentError::new(code, message);
        match self.code {
            Some(provider_code) => error.with_provider_code(provider_code),
            None => error,
        }
    }
}
