//! HTTP adapter for the caller status endpoint.
//!
//! - `GET /api/me` - Sign-in, subscription and trial status

pub mod handlers;
pub mod routes;

pub use handlers::get_me;
pub use routes::account_routes;
