//! # Service Traits
//!
//! Seams between the conversion controller and its collaborators, so the
//! controller can be exercised with fakes in tests.
//!
//! - [`RateService`]: where exchange rates come from
//! - [`ConverterView`]: what the controller may read from and write to the window

use async_trait::async_trait;
use shared::CurrencyCode;

use crate::app::state::ColorIntent;
use crate::services::api::RateQuoteResult;

/// Source of exchange rates.
///
/// Implementations perform exactly one attempt per call and never panic;
/// every failure is reported through the returned result.
#[async_trait]
pub trait RateService: Send + Sync {
    /// Fetch the rate for converting one unit of `base` into `target`.
    async fn fetch_rate(&self, base: CurrencyCode, target: CurrencyCode) -> RateQuoteResult;
}

/// Capabilities the presentation layer exposes to the controller.
///
/// The egui window renders straight from [`crate::app::AppState`], which
/// implements this trait; tests substitute a recording implementation.
pub trait ConverterView {
    /// Raw contents of the amount field.
    fn read_amount_text(&self) -> String;

    fn read_base_currency(&self) -> CurrencyCode;

    fn read_target_currency(&self) -> CurrencyCode;

    /// Main result line and the intent used to colour it.
    fn set_result_display(&mut self, text: &str, intent: ColorIntent);

    /// "1 BASE = rate TARGET" line.
    fn set_rate_display(&mut self, text: &str);

    /// Status line under the rate (fetching / last update time).
    fn set_status_display(&mut self, text: &str);

    /// Disable the convert control and show a busy indicator.
    fn set_convert_control_busy(&mut self, busy: bool);

    /// Replace the amount field's contents.
    fn set_amount(&mut self, text: &str);

    /// Exchange the base and target selections.
    fn swap_currency_selections(&mut self);
}
