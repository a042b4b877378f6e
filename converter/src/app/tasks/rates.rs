//! # Rate Fetch Tasks
//!
//! Runs one rate fetch off the UI thread and posts the outcome back.

use async_channel::Sender;
use std::sync::Arc;
use tracing::{info, warn};

use crate::app::events::AppEvent;
use crate::app::state::ConversionRequest;
use crate::core::service::RateService;
use crate::utils::runtime::TOKIO_RT;

/// Fetch the rate for `request` in the background.
///
/// Internal task function - spawns one task per request (no pooling, no
/// cancellation) and sends exactly one [`AppEvent::RateFetched`].
pub(crate) fn fetch_rate(
    rate_service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
    request: ConversionRequest,
    repaint: Option<egui::Context>,
) {
    info!(
        request_id = %request.id,
        base = %request.base,
        target = %request.target,
        "Spawning rate fetch"
    );

    TOKIO_RT.spawn(async move {
        let start = std::time::Instant::now();
        let result = rate_service.fetch_rate(request.base, request.target).await;
        let duration = start.elapsed();

        match &result {
            Ok(quote) => info!(
                request_id = %request.id,
                rate = quote.rate,
                duration_ms = duration.as_millis(),
                "Rate fetch completed"
            ),
            Err(e) => warn!(
                request_id = %request.id,
                error = %e,
                kind = e.kind(),
                duration_ms = duration.as_millis(),
                "Rate fetch failed"
            ),
        }

        if event_tx
            .send(AppEvent::RateFetched { request, result })
            .await
            .is_err()
        {
            warn!("Event channel closed - dropping rate result");
            return;
        }

        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    });
}
