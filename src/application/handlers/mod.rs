//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod billing;
pub mod generation;

pub use account::{AccountStatus, GetAccountStatusHandler, GetAccountStatusQuery};
pub use billing::{
    CheckoutUrls, StartCheckoutError, StartCheckoutHandler, StartCheckoutResult,
    VerifyCheckoutError, VerifyCheckoutHandler, VerifyCheckoutQuery, VerifyCheckoutResult,
};
pub use generation::{
    GenerateImageCommand, GenerateImageError, GenerateImageHandler, GenerateImageResult,
};
