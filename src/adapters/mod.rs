//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Image generation providers (OpenAI, mock)
//! - `auth` - Session validation (OIDC, mock)
//! - `http` - REST API (axum)
//! - `stripe` - Hosted checkout (Stripe, mock)

pub mod ai;
pub mod auth;
pub mod http;
pub mod stripe;
