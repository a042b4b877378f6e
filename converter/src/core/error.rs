//! # Common Error Types
//!
//! Consolidated error handling for the converter.
//!
//! Every failure a conversion can hit ends up as an [`AppError`] and is shown
//! inline under the form. Nothing here is fatal to the process.
//!
//! ## Error Categories
//!
//! - **Input**: The amount field could not be turned into a valid amount (no fetch is issued)
//! - **Transport**: The rate provider could not be reached at all
//! - **Provider**: The provider answered but refused or could not serve the request
//! - **Unexpected**: Anything else during the fetch (timeouts, malformed responses)
//!
//! ## Display
//!
//! `Display` yields the bare message so it can be rendered verbatim:
//!
//! ```rust
//! use converter::core::error::AppError;
//!
//! let err = AppError::Input("Enter an amount".to_string());
//! assert_eq!(err.to_string(), "Enter an amount");
//! ```

use thiserror::Error;

/// Message shown when the provider cannot be reached.
pub const NO_CONNECTION: &str = "No internet connection";

/// Message shown when the provider reports failure without an error type.
pub const UNKNOWN_PROVIDER_ERROR: &str = "Unknown error";

/// Message shown when the provider's table lacks the requested target.
pub const TARGET_NOT_AVAILABLE: &str = "target currency not available";

/// Application-wide error type.
///
/// `Clone` and `PartialEq` so errors can travel inside [`crate::app::AppEvent`]
/// and be asserted on directly in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Amount text was empty, unparseable or negative.
    #[error("{0}")]
    Input(String),

    /// No connectivity to the rate provider.
    #[error("{0}")]
    Transport(String),

    /// Provider returned a non-success status, or no rate for the target.
    #[error("{0}")]
    Provider(String),

    /// Any other failure raised while fetching.
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    /// Error category, for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Input(_) => "input",
            AppError::Transport(_) => "transport",
            AppError::Provider(_) => "provider",
            AppError::Unexpected(_) => "unexpected",
        }
    }

    /// The inline message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Input(msg)
            | AppError::Transport(msg)
            | AppError::Provider(msg)
            | AppError::Unexpected(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    /// The request URL carries the API key, so it is stripped from the message.
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            AppError::Transport(NO_CONNECTION.to_string())
        } else {
            AppError::Unexpected(describe_error_chain(&err.without_url()))
        }
    }
}

/// `err` followed by each of its sources, joined with `: `.
fn describe_error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}
