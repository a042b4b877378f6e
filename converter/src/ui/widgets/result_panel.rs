//! # Result Panel Widget
//!
//! Result, rate and status lines, centred under the convert button.

use egui::RichText;

use crate::app::AppState;
use crate::ui::theme::Theme;

/// Render the three output lines from `state`.
pub fn render_result_panel(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&state.result_text)
                .size(24.0)
                .strong()
                .color(theme.intent_color(state.result_intent)),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(&state.rate_text).size(12.0).color(theme.accent));
        ui.add_space(4.0);
        ui.label(RichText::new(&state.status_text).size(12.0).color(theme.dim));
    });
}
