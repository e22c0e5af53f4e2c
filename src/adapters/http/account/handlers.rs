//! HTTP handlers for account endpoints.

use axum::extract::{Json, State};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::adapters::http::middleware::OptionalIdentity;
use crate::adapters::http::state::AppState;
use crate::application::{AccountStatus, GetAccountStatusQuery};

/// GET /api/me - Current caller status
///
/// Read-only: cookies are inspected, never written.
pub async fn get_me(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    jar: SignedCookieJar,
) -> Json<AccountStatus> {
    let flags = state.cookies.state(&jar, identity.is_some());

    Json(state.account_status_handler().handle(GetAccountStatusQuery {
        identity,
        subscription_active: flags.subscription_active,
        trial_used: flags.trial_used,
    }))
}
