//! # Application Events
//!
//! Results sent from background tasks to the UI thread.

use crate::app::state::ConversionRequest;
use crate::services::api::RateQuoteResult;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A rate fetch finished (exactly one per request)
    RateFetched {
        request: ConversionRequest,
        result: RateQuoteResult,
    },
}
