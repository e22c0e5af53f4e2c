//! HTTP middleware for axum.
//!
//! - `auth` - Identity resolution middleware and extractor

pub mod auth;

pub use auth::{identity_middleware, session_token, IdentityState, OptionalIdentity};
