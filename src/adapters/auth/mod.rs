//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `mock` - Test implementation that doesn't require external services
//! - `oidc` - Production OIDC implementation (JWKS-backed JWT validation)

mod mock;
mod oidc;

pub use mock::MockSessionValidator;
pub use oidc::{OidcConfig, OidcSessionValidator};
