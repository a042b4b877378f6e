//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the exchange-rate provider.
//!
//! ## Module Organization
//!
//! - [`rates`] - Latest-rates response for a base currency
//!
//! ## Example JSON
//!
//! ```text
//! GET /v6/latest?apikey=...&base=USD
//!
//! {
//!   "result": "success",
//!   "time_last_update_utc": "Mon, 01 Jan 2024 12:00:00 +0000",
//!   "rates": { "USD": 1, "EUR": 0.92, "GBP": 0.79 }
//! }
//! ```
//!
//! Failures come back in the same envelope:
//!
//! ```text
//! { "result": "error", "error-type": "unsupported-code" }
//! ```

pub mod rates;

pub use rates::*;
