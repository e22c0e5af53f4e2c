//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port for Stripe hosted checkout:
//! - Checkout session creation (subscription mode)
//! - Checkout session status lookup
//!
//! # Security
//!
//! The API key is handled via `secrecy::SecretString` and only exposed when
//! building the basic-auth header.
//!
//! # Configuration
//!
//! Required environment variables:
//! - `GHIBLI_ART__PAYMENT__STRIPE_API_KEY`: Stripe secret API key
//! - `GHIBLI_ART__PAYMENT__STRIPE_PRICE_ID`: Subscription price

mod api_types;
mod mock_payment_provider;
mod stripe_adapter;

pub use api_types::{StripeApiError, StripeCheckoutSession, StripeErrorResponse};
pub use mock_payment_provider::{MethodCall, MockPaymentProvider};
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
