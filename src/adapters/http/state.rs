//! Shared application state for the HTTP layer.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::application::{
    CheckoutUrls, GenerateImageHandler, GetAccountStatusHandler, StartCheckoutHandler,
    VerifyCheckoutHandler,
};
use crate::domain::generation::UploadPolicy;
use crate::ports::{ImageGenerator, PaymentProvider, SessionValidator};

use super::entitlement_cookies::EntitlementCookies;
use super::middleware::IdentityState;

/// Subscription checkout parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub price_id: String,
    pub urls: CheckoutUrls,
}

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub image_generator: Arc<dyn ImageGenerator>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub session_validator: Arc<dyn SessionValidator>,
    /// Signs and verifies the entitlement cookies.
    pub cookie_key: Key,
    pub cookies: EntitlementCookies,
    pub upload_policy: UploadPolicy,
    pub checkout: CheckoutSettings,
    /// Name of the cookie carrying the identity provider's session token.
    pub session_cookie: String,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn generate_image_handler(&self) -> GenerateImageHandler {
        GenerateImageHandler::new(self.image_generator.clone())
    }

    pub fn start_checkout_handler(&self) -> StartCheckoutHandler {
        StartCheckoutHandler::new(
            self.payment_provider.clone(),
            self.checkout.price_id.clone(),
            self.checkout.urls.clone(),
        )
    }

    pub fn verify_checkout_handler(&self) -> VerifyCheckoutHandler {
        VerifyCheckoutHandler::new(self.payment_provider.clone())
    }

    pub fn account_status_handler(&self) -> GetAccountStatusHandler {
        GetAccountStatusHandler::new()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<AppState> for IdentityState {
    fn from_ref(state: &AppState) -> Self {
        IdentityState {
            validator: state.session_validator.clone(),
            session_cookie: state.session_cookie.clone(),
        }
    }
}
