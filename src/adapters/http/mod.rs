//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own adapter module; [`app_router`] assembles
//! them under `/api` with the shared middleware stack.

pub mod account;
pub mod billing;
pub mod entitlement_cookies;
pub mod error;
pub mod generation;
pub mod middleware;
pub mod state;

use axum::extract::FromRef;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use entitlement_cookies::{EntitlementCookies, SUBSCRIPTION_COOKIE, TRIAL_COOKIE};
pub use error::{ApiError, ErrorResponse};
pub use middleware::{identity_middleware, IdentityState, OptionalIdentity};
pub use state::{AppState, CheckoutSettings};

/// Build the complete application router.
///
/// # Routes
/// - `POST /api/generate` - identity-aware
/// - `GET /api/me` - identity-aware
/// - `GET /api/upload-policy`
/// - `POST /api/stripe/checkout`
/// - `GET /api/stripe/verify`
/// - `GET /health`
///
/// Only the identity-aware routes consult the identity provider, so an
/// outage there never blocks checkout.
pub fn app_router(state: AppState, cors_origins: &[String]) -> Router {
    let identity = axum::middleware::from_fn_with_state(
        IdentityState::from_ref(&state),
        identity_middleware,
    );

    let identity_aware = Router::new()
        .merge(generation::generation_routes(state.upload_policy))
        .merge(account::account_routes())
        .route_layer(identity);

    let api = identity_aware
        .merge(generation::upload_policy_routes())
        .nest("/stripe", billing::billing_routes());

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors_layer(cors_origins));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(layers)
        .with_state(state)
}

/// CORS for the configured front-end origins. Credentials are allowed so the
/// entitlement and session cookies travel with cross-origin requests.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
