//! # Logging and Diagnostics
//!
//! File-based structured logging for the converter.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/converter.log`, rotated daily
//! - **Stderr mirror**: for running from a terminal
//! - **Panic logging**: panics land in the log file before the process dies
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `converter=info,warn`)
//! - `CONVERTER_LOG_DIR`: Log directory (default `logs`)
//! - `CONVERTER_LOG_STDOUT`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize logging
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
