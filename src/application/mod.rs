//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (generate, start checkout) are kept apart from query
//! handlers (verify checkout, account status).

pub mod handlers;

pub use handlers::{
    AccountStatus, CheckoutUrls, GenerateImageCommand, GenerateImageError, GenerateImageHandler,
    GenerateImageResult, GetAccountStatusHandler, GetAccountStatusQuery, StartCheckoutError,
    StartCheckoutHandler, StartCheckoutResult, VerifyCheckoutError, VerifyCheckoutHandler,
    VerifyCheckoutQuery, VerifyCheckoutResult,
};
