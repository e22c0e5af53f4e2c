//! Payment provider port for hosted checkout.
//!
//! Defines the contract for payment gateway integrations (e.g., Stripe).
//! This service never charges cards or manages subscriptions itself: it asks
//! the provider for a hosted checkout page and later reads back whether that
//! checkout completed.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any hosted-checkout provider
//! - **Read-only verification**: Session status lookups never mutate the session

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted checkout session in subscription mode.
    ///
    /// Returns a URL for the customer to complete payment.
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError>;

    /// Look up the payment and completion status of a checkout session.
    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionStatus, PaymentError>;
}

/// Request to create a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Provider price identifier for the subscription plan.
    pub price_id: String,

    /// URL to redirect after successful checkout.
    pub success_url: String,

    /// URL to redirect after canceled checkout.
    pub cancel_url: String,
}

/// Checkout session for payment completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID.
    pub id: String,

    /// URL for customer to complete checkout.
    pub url: String,
}

/// Status of an existing checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionStatus {
    /// Provider's session ID.
    pub id: String,

    /// Whether money has been collected.
    pub payment_status: PaymentStatus,

    /// Lifecycle state of the session.
    pub status: CheckoutState,
}

impl CheckoutSessionStatus {
    /// Paid and complete: the only state that activates a subscription.
    pub fn is_completed(&self) -> bool {
        self.payment_status == PaymentStatus::Paid && self.status == CheckoutState::Complete
    }
}

/// Payment status of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    NoPaymentRequired,
    Unknown,
}

impl PaymentStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "paid" => Self::Paid,
            "unpaid" => Self::Unpaid,
            "no_payment_required" => Self::NoPaymentRequired,
            _ => Self::Unknown,
        }
    }
}

/// Lifecycle state of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    Open,
    Complete,
    Expired,
    Unknown,
}

impl CheckoutState {
    pub fn parse(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "complete" => Self::Complete,
            "expired" => Self::Expired,
            _ => Self::Unknown,
        }
    }
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create a not found error.
    pub fn not_found(resource: &str) -> Self {
        Self::new(PaymentErrorCode::NotFound, format!("{} not found", resource))
    }

    /// Create a provider API error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Resource not found.
    NotFound,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::NotFound => "not_found",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn PaymentProvider) {}
    }

    fn status(payment: PaymentStatus, state: CheckoutState) -> CheckoutSessionStatus {
        CheckoutSessionStatus {
            id: "cs_test".to_string(),
            payment_status: payment,
            status: state,
        }
    }

    #[test]
    fn only_paid_and_complete_counts_as_completed() {
        assert!(status(PaymentStatus::Paid, CheckoutState::Complete).is_completed());

        assert!(!status(PaymentStatus::Paid, CheckoutState::Open).is_completed());
        assert!(!status(PaymentStatus::Unpaid, CheckoutState::Complete).is_completed());
        assert!(!status(PaymentStatus::NoPaymentRequired, CheckoutState::Complete).is_completed());
        assert!(!status(PaymentStatus::Unknown, CheckoutState::Expired).is_completed());
    }

    #[test]
    fn parses_provider_status_strings() {
        assert_eq!(PaymentStatus::parse("paid"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::parse("unpaid"), PaymentStatus::Unpaid);
        assert_eq!(PaymentStatus::parse("weird"), PaymentStatus::Unknown);
        assert_eq!(CheckoutState::parse("complete"), CheckoutState::Complete);
        assert_eq!(CheckoutState::parse("expired"), CheckoutState::Expired);
        assert_eq!(CheckoutState::parse(""), CheckoutState::Unknown);
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::network("connection reset");
        assert_eq!(err.to_string(), "network_error: connection reset");
    }

    #[test]
    fn not_found_names_resource() {
        let err = PaymentError::not_found("Checkout session");
        assert_eq!(err.code, PaymentErrorCode::NotFound);
        assert_eq!(err.message, "Checkout session not found");
    }
}
