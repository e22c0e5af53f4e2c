//! Billing handlers - hosted checkout and its verification.

mod start_checkout;
mod verify_checkout;

pub use start_checkout::{
    CheckoutUrls, StartCheckoutError, StartCheckoutHandler, StartCheckoutResult,
};
pub use verify_checkout::{
    VerifyCheckoutError, VerifyCheckoutHandler, VerifyCheckoutQuery, VerifyCheckoutResult,
};
