//! Account handlers.

mod get_status;

pub use get_status::{AccountStatus, GetAccountStatusHandler, GetAccountStatusQuery};
