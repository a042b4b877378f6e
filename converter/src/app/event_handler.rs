//! # Event Handler
//!
//! Applies results from background tasks to the application state.
//!
//! Results are applied in arrival order. When two fetches overlap, the one
//! that finishes last decides what is shown.

use crate::app::controller;
use crate::app::state::ConversionRequest;
use crate::app::{App, AppEvent};
use crate::services::api::RateQuoteResult;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Acquires the write lock once per event.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::RateFetched { request, result } => {
                self.handle_rate_fetched(request, result);
            }
        }
    }
}

impl App {
    fn handle_rate_fetched(&mut self, request: ConversionRequest, result: RateQuoteResult) {
        tracing::debug!(
            request_id = %request.id,
            ok = result.is_ok(),
            "Applying rate result"
        );

        let mut guard = self.state.write();
        let state = &mut *guard;

        if let Ok(quote) = &result {
            state.last_rate = Some(quote.rate);
            state.last_quote_at = quote.retrieved_at.clone();
        }

        let display = controller::complete_conversion(state, &request, result);
        state.display = display;
    }
}
