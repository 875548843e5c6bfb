//! Shared utilities, configuration, and error handling for Atelier
//!
//! This crate provides common functionality used across the Atelier application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Axum extractors shared by the domain crates

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::Config;
pub use db::is_unique_violation;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use state::StateError;
