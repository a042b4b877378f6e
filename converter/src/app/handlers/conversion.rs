//! # Conversion Handlers
//!
//! Handlers for the converter form: input edits, convert, swap and quick amounts.
//!
//! Each handler takes the state lock only for the duration of the transition
//! and never while a network call is in progress.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::CurrencyCode;
use std::sync::Arc;

use crate::app::controller;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, DisplayState};
use crate::app::tasks;
use crate::core::service::{ConverterView, RateService};

/// Amount text edited.
///
/// Internal handler function - use [`crate::app::App::handle_amount_changed`] instead.
pub(crate) fn handle_amount_changed(state: Arc<RwLock<AppState>>, text: String) {
    let mut guard = state.write();
    let state = &mut *guard;
    state.set_amount(&text);
    state.display = controller::clear_result(state);
}

/// Base currency picked.
///
/// Internal handler function - use [`crate::app::App::handle_base_currency_selected`] instead.
pub(crate) fn handle_base_currency_selected(state: Arc<RwLock<AppState>>, code: CurrencyCode) {
    let mut guard = state.write();
    let state = &mut *guard;
    state.form.base = code;
    state.display = controller::clear_result(state);
}

/// Target currency picked.
///
/// Internal handler function - use [`crate::app::App::handle_target_currency_selected`] instead.
pub(crate) fn handle_target_currency_selected(state: Arc<RwLock<AppState>>, code: CurrencyCode) {
    let mut guard = state.write();
    let state = &mut *guard;
    state.form.target = code;
    state.display = controller::clear_result(state);
}

/// Convert triggered: validate, then fetch in the background.
///
/// Internal handler function - use [`crate::app::App::handle_convert_click`] instead.
pub(crate) fn handle_convert_click(
    state: Arc<RwLock<AppState>>,
    rate_service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
    repaint: Option<egui::Context>,
) {
    let request = {
        let mut guard = state.write();
        let state = &mut *guard;
        match controller::begin_conversion(state) {
            Ok(request) => {
                state.display = DisplayState::Pending;
                request
            }
            Err(e) => {
                tracing::info!(error = %e, kind = e.kind(), "Conversion rejected before fetch");
                state.display = controller::show_error(state, e.message());
                return;
            }
        }
    }; // Lock released here

    tasks::rates::fetch_rate(rate_service, event_tx, request, repaint);
}

/// Swap base and target, then convert.
///
/// Internal handler function - use [`crate::app::App::handle_swap_click`] instead.
pub(crate) fn handle_swap_click(
    state: Arc<RwLock<AppState>>,
    rate_service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
    repaint: Option<egui::Context>,
) {
    state.write().swap_currency_selections();
    handle_convert_click(state, rate_service, event_tx, repaint);
}

/// Quick amount picked: same as typing it and pressing convert.
///
/// Internal handler function - use [`crate::app::App::handle_quick_amount_click`] instead.
pub(crate) fn handle_quick_amount_click(
    state: Arc<RwLock<AppState>>,
    rate_service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
    repaint: Option<egui::Context>,
    preset: u32,
) {
    handle_amount_changed(state.clone(), preset.to_string());
    handle_convert_click(state, rate_service, event_tx, repaint);
}
