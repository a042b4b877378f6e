//! # Shared Currency Library
//!
//! Data and pure helpers shared by the converter client and anything else that
//! needs to speak the exchange-rate provider's language.
//!
//! ## Structure
//!
//! - **[`currency`]**: Supported currency codes and display symbols
//! - **[`dto`]**: Wire types for the rate provider's JSON responses
//!   - **[`dto::rates`]**: Latest-rates response for a base currency
//! - **[`utils`]**: Display helpers
//!   - **[`utils::format_number`]**: Magnitude-aware number formatting
//!
//! ## Usage
//!
//! ```rust
//! use shared::currency::{symbol_for, CurrencyCode};
//! use shared::utils::format_number;
//!
//! let usd: CurrencyCode = "USD".parse().unwrap();
//! assert_eq!(symbol_for(usd.as_str()), "$");
//! assert_eq!(format_number(1234.5), "1,234.5");
//! ```

pub mod currency;
pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use currency::{list_supported_currencies, symbol_for, CurrencyCode, UnsupportedCurrency};
pub use dto::*;
pub use utils::*;
