//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ImageGenerator` - External image-generation provider
//! - `PaymentProvider` - Hosted checkout and session status lookup
//! - `SessionValidator` - Identity provider session token validation

mod image_generator;
mod payment_provider;
mod session_validator;

pub use image_generator::{GenerationError, ImageGenerator, ProviderInfo};
pub use payment_provider::{
    CheckoutSession, CheckoutSessionStatus, CheckoutState, CreateCheckoutRequest, PaymentError,
    PaymentErrorCode, PaymentProvider, PaymentStatus,
};
pub use session_validator::SessionValidator;
