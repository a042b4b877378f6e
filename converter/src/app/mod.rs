//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the converter window, the background rate
//! fetches, and the shared state they both touch.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains finished fetches every frame   │   │
//! │  │  - handle_*() - user actions from the window         │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - form inputs and rendered lines                    │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  - tasks::rates::fetch_rate() - one HTTP request per click  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fetch tasks never touch the state. They send an [`AppEvent`] back and the
//! UI thread applies it in [`App::on_tick`], so every view update happens on
//! the UI thread.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use converter::app::App;
//! use converter::config::ConverterConfig;
//!
//! let mut app = App::new(&ConverterConfig::from_env());
//!
//! // In the egui update loop:
//! app.on_tick();
//! app.handle_amount_changed("250".to_string());
//! app.handle_convert_click();
//! ```

pub mod events;
pub mod state;

mod controller;
mod event_handler;
mod handlers;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::CurrencyCode;
use std::sync::Arc;

use crate::config::ConverterConfig;
use crate::core::service::RateService;
use crate::services::api::RateClient;
use event_handler::AppEventHandler;

/// Main application orchestrator.
pub struct App {
    /// Shared application state.
    ///
    /// Hold locks for minimal duration; the window reads it every frame.
    pub state: Arc<RwLock<AppState>>,

    /// Finished fetches, polled in `on_tick()` with `try_recv()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every fetch task.
    event_tx: Sender<AppEvent>,

    rate_service: Arc<dyn RateService>,

    /// Woken when a fetch finishes so the result shows without user input
    repaint: Option<egui::Context>,
}

impl App {
    /// Create the app with the HTTP rate client built from `config`.
    pub fn new(config: &ConverterConfig) -> Self {
        Self::with_rate_service(Arc::new(RateClient::new(config)))
    }

    /// Create the app around any [`RateService`].
    pub fn with_rate_service(rate_service: Arc<dyn RateService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - event channel created");

        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            rate_service,
            repaint: None,
        }
    }

    /// Give background tasks a handle to wake the window.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    /// Sender used by fetch tasks. Exposed for tests and tooling.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    /// Called every frame: apply every finished fetch, in arrival order.
    ///
    /// Non-blocking; returns immediately when nothing is pending.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;

        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed events");
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    // ========== User Actions ==========

    /// Amount text edited: clears the shown result.
    pub fn handle_amount_changed(&mut self, text: String) {
        handlers::conversion::handle_amount_changed(self.state.clone(), text);
    }

    /// Base currency picked: clears the shown result.
    pub fn handle_base_currency_selected(&mut self, code: CurrencyCode) {
        handlers::conversion::handle_base_currency_selected(self.state.clone(), code);
    }

    /// Target currency picked: clears the shown result.
    pub fn handle_target_currency_selected(&mut self, code: CurrencyCode) {
        handlers::conversion::handle_target_currency_selected(self.state.clone(), code);
    }

    /// Convert button or Enter in the amount field.
    pub fn handle_convert_click(&mut self) {
        handlers::conversion::handle_convert_click(
            self.state.clone(),
            self.rate_service.clone(),
            self.event_tx.clone(),
            self.repaint.clone(),
        );
    }

    /// Swap button: exchange the currencies and convert.
    pub fn handle_swap_click(&mut self) {
        handlers::conversion::handle_swap_click(
            self.state.clone(),
            self.rate_service.clone(),
            self.event_tx.clone(),
            self.repaint.clone(),
        );
    }

    /// Quick amount button: set the amount and convert.
    pub fn handle_quick_amount_click(&mut self, preset: u32) {
        handlers::conversion::handle_quick_amount_click(
            self.state.clone(),
            self.rate_service.clone(),
            self.event_tx.clone(),
            self.repaint.clone(),
            preset,
        );
    }
}
