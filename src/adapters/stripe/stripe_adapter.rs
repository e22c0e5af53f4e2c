//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe REST API using
//! form-encoded requests and basic auth.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key);
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CheckoutSession, CheckoutSessionStatus, CreateCheckoutRequest, PaymentError, PaymentProvider,
};

use super::api_types::{StripeCheckoutSession, StripeErrorResponse};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Stripe payment provider adapter.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Form parameters for a single-price subscription checkout paid by card.
    fn checkout_params(request: &CreateCheckoutRequest) -> Vec<(&'static str, String)> {
        vec![
            ("payment_method_types[0]", "card".to_string()),
            ("line_items[0][price]", request.price_id.clone()),
            ("line_items[0][quantity]", "1".to_string()),
            ("mode", "subscription".to_string()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
        ]
    }

    /// Turn a non-success response into a `PaymentError`.
    async fn error_from_response(response: reqwest::Response) -> PaymentError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<StripeErrorResponse>(&body) {
            Ok(envelope) => envelope.error.into_payment_error(status),
            Err(_) => PaymentError::provider(format!("Stripe API error ({}): {}", status, body)),
        }
    }

    async fn parse_session(response: reqwest::Response) -> Result<StripeCheckoutSession, PaymentError> {
        response.json().await.map_err(|e| {
            PaymentError::provider(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);
        let params = Self::checkout_params(&request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if !response.status().is_success() {
            let error = Self::error_from_response(response).await;
            tracing::warn!(code = %error.code, error = %error.message, "Stripe checkout creation failed");
            return Err(error);
        }

        let session = Self::parse_session(response).await?;
        let checkout_url = session
            .url
            .ok_or_else(|| PaymentError::provider("Checkout session has no URL"))?;

        tracing::info!(session_id = %session.id, "Created Stripe checkout session");

        Ok(CheckoutSession {
            id: session.id,
            url: checkout_url,
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionStatus, PaymentError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            self.config.api_base_url, session_id
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PaymentError::not_found("Checkout session"));
        }

        if !response.status().is_success() {
            let error = Self::error_from_response(response).await;
            tracing::warn!(session_id, code = %error.code, error = %error.message, "Stripe session lookup failed");
            return Err(error);
        }

        let session = Self::parse_session(response).await?;
        let status = session.to_status();

        tracing::debug!(
            session_id = %status.id,
            payment_status = ?status.payment_status,
            status = ?status.status,
            mode = %session.mode,
            "Retrieved Stripe checkout session"
        );

        Ok(status)
    }
}
