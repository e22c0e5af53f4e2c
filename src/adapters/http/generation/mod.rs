//! HTTP adapter for image generation endpoints.
//!
//! - `POST /api/generate` - Turn an uploaded photo into an illustration
//! - `GET /api/upload-policy` - Publish the upload limits the browser pre-checks against

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{generate, get_upload_policy};
pub use routes::{generation_routes, upload_policy_routes};
