//! Axum router configuration for generation endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;
use crate::domain::generation::UploadPolicy;

use super::handlers::{generate, get_upload_policy};

/// Create the generation router.
///
/// # Routes
/// - `POST /generate` - Generate an illustration (identity-aware, body capped by the policy)
///
/// The body limit is the policy ceiling plus multipart overhead; anything
/// larger is cut off while streaming and reported as `File too large`.
pub fn generation_routes(policy: UploadPolicy) -> Router<AppState> {
    Router::new().route(
        "/generate",
        post(generate).layer(DefaultBodyLimit::max(policy.body_limit())),
    )
}

/// # Routes
/// - `GET /upload-policy` - Published upload limits
pub fn upload_policy_routes() -> Router<AppState> {
    Router::new().route("/upload-policy", get(get_upload_policy))
}
