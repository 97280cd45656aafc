//! Error types for the Rickdex client.
//!
//! Request failures are represented by [`ApiError`], which is shared between every consumer
//! of a cached query and therefore implements `Clone`. Configuration problems detected at
//! startup are represented by [`ConfigError`]. Both use `thiserror` for their `Display` and
//! `Error` implementations.

pub mod api;
pub mod config;

pub use api::ApiError;
pub use config::ConfigError;
