//! Foundation module - Shared domain primitives.
//!
//! Contains the identity vocabulary shared by every handler.

mod auth;

pub use auth::{AuthError, Identity};
