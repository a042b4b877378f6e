//! # Header Widget
//!
//! Window title with a live UTC clock on the right.

use chrono::{DateTime, Utc};
use egui::RichText;

use crate::ui::theme::Theme;
use crate::utils::time::clock_text;

/// Title shown in the header and the native window.
pub const TITLE: &str = "Currency Converter";

/// Render the header row.
pub fn render_header(ui: &mut egui::Ui, now: DateTime<Utc>, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(TITLE).size(26.0).strong().color(theme.accent));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
            ui.label(RichText::new(clock_text(now)).size(12.0).color(theme.dim));
        });
    });
}
