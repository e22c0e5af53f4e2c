//! Ghibli Art - photo-to-illustration service.
//!
//! Visitors upload a photo and get back a hand-painted-animation style
//! illustration. The first generation is a free trial per browser; after
//! that a signed-in caller with an active subscription may keep generating.
//!
//! Layout follows ports and adapters: `domain` holds the entitlement and
//! upload rules, `ports` the provider contracts, `adapters` the OpenAI,
//! Stripe, OIDC and HTTP implementations, and `application` the use cases
//! that tie them together.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
pub mod telemetry;
