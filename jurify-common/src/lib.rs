//! # JuriFy Common Library
//!
//! Shared code for the JuriFy client:
//! - API request/response types for the backend wire protocol
//! - Configuration resolution (flags, environment, TOML file)
//! - Locale tables for user-facing text
//! - Error types

pub mod api;
pub mod config;
pub mod error;
pub mod locale;

pub use error::{Error, Result};
pub use locale::Locale;
