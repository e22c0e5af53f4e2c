//! Axum router configuration for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{create_checkout, verify_checkout};

/// Create the checkout router, mounted at `/api/stripe`.
///
/// # Routes
/// - `POST /checkout` - Create a hosted checkout session
/// - `GET /verify` - Verify a checkout session by `session_id`
pub fn billing_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(create_checkout))
        .route("/verify", get(verify_checkout))
}
