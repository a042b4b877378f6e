//! # Form Components
//!
//! Cards, section labels and the amount field.

use egui::{FontId, Margin, RichText, Stroke};

use crate::ui::theme::Theme;

/// Small caps-style label above a card.
pub fn render_section_label(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(RichText::new(text).size(10.0).color(theme.dim));
}

/// Bordered card holding one group of controls.
pub fn render_card<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(10)
        .inner_margin(Margin::symmetric(16, 10))
        .show(ui, add_contents)
}

/// Amount field with the base currency symbol in front of it.
///
/// Returns the text edit response so the caller can react to edits and Enter.
pub fn render_amount_input(
    ui: &mut egui::Ui,
    value: &mut String,
    symbol: &str,
    theme: &Theme,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new(symbol).size(22.0).color(theme.accent));
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text("0.00")
                .font(FontId::proportional(22.0))
                .text_color(theme.normal)
                .frame(false)
                .desired_width(f32::INFINITY),
        )
    })
    .inner
}

/// Thin horizontal divider in the border colour.
pub fn render_divider(ui: &mut egui::Ui, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 1.0),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(rect, 0.0, theme.border);
}
