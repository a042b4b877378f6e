//! # Utility Functions
//!
//! Shared utility functions used across the converter.
//!
//! ## Modules
//!
//! - **[`validation`]**: Amount field parsing
//! - **[`time`]**: Provider timestamp parsing and the header clock
//! - **[`runtime`]**: Background tokio runtime for network calls
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Number formatting
//! - [`crate::core`]: Error types

pub mod runtime;
pub mod time;
pub mod validation;
