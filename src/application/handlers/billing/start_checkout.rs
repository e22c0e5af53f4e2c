//! StartCheckoutHandler - Command handler for opening a hosted checkout.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::{CreateCheckoutRequest, PaymentError, PaymentProvider};

/// Placeholder the payment provider replaces with the real session ID.
const SESSION_ID_TEMPLATE: &str = "{CHECKOUT_SESSION_ID}";

/// Redirect targets for the hosted checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutUrls {
    /// Builds the redirect targets under the public base URL.
    pub fn for_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            success_url: format!("{}/checkout/success?session_id={}", base, SESSION_ID_TEMPLATE),
            cancel_url: format!("{}/checkout/cancel", base),
        }
    }
}

/// Result of successful checkout creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCheckoutResult {
    pub session_id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartCheckoutError {
    #[error("Failed to create checkout session: {0}")]
    Provider(#[from] PaymentError),
}

/// Handler for starting a subscription checkout.
pub struct StartCheckoutHandler {
    provider: Arc<dyn PaymentProvider>,
    price_id: String,
    urls: CheckoutUrls,
}

impl StartCheckoutHandler {
    pub fn new(
        provider: Arc<dyn PaymentProvider>,
        price_id: impl Into<String>,
        urls: CheckoutUrls,
    ) -> Self {
        Self {
            provider,
            price_id: price_id.into(),
            urls,
        }
    }

    pub async fn handle(&self) -> Result<StartCheckoutResult, StartCheckoutError> {
        let request = CreateCheckoutRequest {
            price_id: self.price_id.clone(),
            success_url: self.urls.success_url.clone(),
            cancel_url: self.urls.cancel_url.clone(),
        };

        let session = self
            .provider
            .create_checkout_session(request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Checkout session creation failed");
                StartCheckoutError::Provider(e)
            })?;

        tracing::info!(session_id = %session.id, "Checkout session created");

        Ok(StartCheckoutResult {
            session_id: session.id,
            url: session.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::MockPaymentProvider;

    fn handler(provider: &MockPaymentProvider) -> StartCheckoutHandler {
        StartCheckoutHandler::new(
            Arc::new(provider.clone()),
            "price_123",
            CheckoutUrls::for_base_url("https://art.example.com/"),
        )
    }

    #[test]
    fn urls_follow_public_base() {
        let urls = CheckoutUrls::for_base_url("https://art.example.com/");
        assert_eq!(
            urls.success_url,
            "https://art.example.com/checkout/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(urls.cancel_url, "https://art.example.com/checkout/cancel");
    }

    #[tokio::test]
    async fn returns_hosted_checkout_url() {
        let provider = MockPaymentProvider::new();

        let result = handler(&provider).handle().await.unwrap();

        assert_eq!(result.session_id, "cs_mock_1");
        assert_eq!(result.url, "https://checkout.stripe.com/c/pay/cs_mock_1");
    }

    #[tokio::test]
    async fn passes_price_and_redirects_to_provider() {
        let provider = MockPaymentProvider::new();

        handler(&provider).handle().await.unwrap();

        let call = &provider.calls()[0];
        assert_eq!(call.method, "create_checkout_session");
        assert_eq!(
            call.args,
            vec![
                "price_123".to_string(),
                "https://art.example.com/checkout/success?session_id={CHECKOUT_SESSION_ID}"
                    .to_string(),
                "https://art.example.com/checkout/cancel".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn provider_failure_is_reported() {
        let provider = MockPaymentProvider::new();
        provider.set_error(PaymentError::network("connection refused"));

        let err = handler(&provider).handle().await.unwrap_err();

        assert!(matches!(err, StartCheckoutError::Provider(_)));
    }
}
