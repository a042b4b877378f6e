//! # Exchange-Rate Provider Client
//!
//! HTTP access to the provider's latest-rates endpoint.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - RateClient struct (reqwest client, key, endpoint)
//! └── rates.rs    - Latest-rates request and response interpretation
//! ```
//!
//! ## Failure Mapping
//!
//! | Situation                              | Error                                   |
//! |----------------------------------------|-----------------------------------------|
//! | Cannot connect                         | `Transport("No internet connection")`   |
//! | `result` is not `"success"`            | `Provider(error-type or "Unknown error")` |
//! | Target missing from the rate table     | `Provider("target currency not available")` |
//! | Timeout, malformed body, anything else | `Unexpected(description)`               |

pub mod client;
pub mod rates;

pub use client::RateClient;
pub use rates::{RateQuote, RateQuoteResult};
