//! HTTP adapter for subscription checkout endpoints.
//!
//! - `POST /api/stripe/checkout` - Open a hosted subscription checkout
//! - `GET /api/stripe/verify` - Confirm a checkout and activate the subscription cookie

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{create_checkout, verify_checkout};
pub use routes::billing_routes;
