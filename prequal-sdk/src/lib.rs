//! Shared wire types for the merchant prequalification configuration service.
//!
//! The HTTP client lives behind the `client` cargo feature.

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
