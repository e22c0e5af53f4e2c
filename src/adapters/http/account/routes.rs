//! Axum router configuration for account endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::get_me;

/// # Routes
/// - `GET /me` - Caller status (identity-aware)
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}
