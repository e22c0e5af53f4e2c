//! Entitlement - who may request a generation.
//!
//! The state is rebuilt on every request from three independent flags
//! (signed in, subscription cookie, trial cookie) and handed to the pure
//! [`authorize`] function. Reading and writing the flags happens only at the
//! HTTP boundary; nothing in this module performs I/O.
//!
//! # Decision table
//!
//! | logged in | subscription | trial used | decision |
//! |-----------|--------------|------------|----------|
//! | no        | any          | yes        | deny `trial_used` |
//! | no        | any          | no         | allow, mark trial on success |
//! | yes       | no           | any        | deny `subscription_required` |
//! | yes       | yes          | any        | allow |

mod decision;
mod state;

pub use decision::{authorize, Decision, DenialReason};
pub use state::EntitlementState;
