//! # Quick Amounts Widget
//!
//! Row of preset amounts that convert in one click.

use egui::RichText;

use crate::app::QUICK_AMOUNTS;
use crate::ui::theme::Theme;

/// Render the preset row. Returns the preset clicked this frame, if any.
pub fn render_quick_amounts(ui: &mut egui::Ui, theme: &Theme) -> Option<u32> {
    let mut clicked = None;

    ui.columns(QUICK_AMOUNTS.len(), |columns| {
        for (column, &preset) in columns.iter_mut().zip(QUICK_AMOUNTS.iter()) {
            let button = egui::Button::new(RichText::new(preset.to_string()).size(12.0).color(theme.dim))
                .fill(theme.card)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .min_size(egui::vec2(column.available_width(), 30.0));

            if column.add(button).clicked() {
                clicked = Some(preset);
            }
        }
    });

    clicked
}
