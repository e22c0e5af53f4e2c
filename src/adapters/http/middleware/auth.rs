//! Identity middleware and extractor for axum.
//!
//! This module provides:
//! - `identity_middleware` - Layer that resolves the caller's identity and injects it into extensions
//! - `OptionalIdentity` - Extractor yielding `Some(identity)` for signed-in callers
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, keeping it provider-agnostic.
//!
//! ```text
//! Request → identity_middleware → injects Identity into extensions (signed in only)
//!                                      ↓
//!                              Handler → OptionalIdentity extractor reads from extensions
//! ```
//!
//! Every endpoint here serves anonymous callers too, so a missing, invalid or
//! expired token is not an error: the request simply continues anonymous.
//! Only an unreachable identity provider fails the request.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::Identity;
use crate::ports::SessionValidator;

/// Identity middleware state.
#[derive(Clone)]
pub struct IdentityState {
    pub validator: Arc<dyn SessionValidator>,
    /// Cookie consulted when no bearer header is present.
    pub session_cookie: String,
}

/// Finds the session token: `Authorization: Bearer <token>` first, then the session cookie.
pub fn session_token(headers: &HeaderMap, session_cookie: &str) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(session_cookie)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

/// Resolves the caller's identity.
///
/// 1. Extracts the session token (bearer header or session cookie)
/// 2. Validates it using the `SessionValidator` port
/// 3. On success, injects `Identity` into request extensions
/// 4. On missing, invalid or expired token, continues anonymous
/// 5. On identity provider failure, returns 503
pub async fn identity_middleware(
    State(state): State<IdentityState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(request.headers(), &state.session_cookie) else {
        return next.run(request).await;
    };

    match state.validator.validate(&token).await {
        Ok(identity) => {
            tracing::debug!(subject = %identity.subject, "Resolved caller identity");
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) if e.is_anonymous_fallback() => {
            tracing::debug!(error = %e, "Session token rejected, continuing anonymous");
            next.run(request).await
        }
        Err(e) => {
            tracing::error!(error = %e, "Identity provider unavailable");
            ApiError::auth_unavailable().into_response()
        }
    }
}

/// Extractor for the caller's identity; `None` for anonymous callers.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(OptionalIdentity(identity): OptionalIdentity) -> impl IntoResponse {
///     match identity {
///         Some(i) => format!("Hello, {}!", i.subject),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Identity>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
