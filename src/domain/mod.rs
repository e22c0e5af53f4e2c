//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identity, auth errors)
//! - `entitlement` - Trial and subscription gating decision
//! - `generation` - Styles, upload validation, prompt plans and image results

pub mod entitlement;
pub mod foundation;
pub mod generation;
