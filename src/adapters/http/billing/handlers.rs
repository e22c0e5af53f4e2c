//! HTTP handlers for checkout endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::adapters::http::state::AppState;

use super::dto::{CheckoutResponse, VerifyCheckoutParams, VerifyCheckoutResponse};

/// POST /api/stripe/checkout - Start a subscription checkout
///
/// Open to anonymous callers; the subscription is tied to the browser's
/// cookie, not to an account.
pub async fn create_checkout(
    State(state): State<AppState>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let result = state.start_checkout_handler().handle().await?;
    tracing::info!(session_id = %result.session_id, "Checkout session created");

    Ok(Json(CheckoutResponse { url: result.url }))
}

/// GET /api/stripe/verify - Verify a completed checkout
///
/// Sets the subscription cookie only when the session is paid and complete.
/// Repeating the call for the same session gives the same answer.
pub async fn verify_checkout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    query: Result<Query<VerifyCheckoutParams>, QueryRejection>,
) -> Result<(SignedCookieJar, Json<VerifyCheckoutResponse>), ApiError> {
    let Query(params) = query.map_err(|e| {
        ApiError::new(
            e.status(),
            ErrorResponse::new("Invalid query").with_details(e.body_text()),
        )
    })?;

    let result = state
        .verify_checkout_handler()
        .handle(params.into())
        .await?;

    let jar = if result.subscription_active {
        state.cookies.activate_subscription(jar)
    } else {
        jar
    };

    Ok((jar, Json(result.into())))
}
