//! # Converter Screen
//!
//! The single screen: amount, currency pair, convert, result, quick amounts.

use chrono::Utc;
use egui::RichText;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{currency_picker, forms, header, quick_amounts, result_panel};

/// Convert button label while idle.
pub const CONVERT_LABEL: &str = "CONVERT";

/// Convert button label while a fetch is in flight.
pub const BUSY_LABEL: &str = "…";

/// Render the converter screen.
///
/// `state` is a snapshot taken before the frame; user actions go through
/// `app` and show up in the next frame's snapshot.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    header::render_header(ui, Utc::now(), theme);
    ui.add_space(12.0);
    forms::render_divider(ui, theme);
    ui.add_space(20.0);

    // Amount
    forms::render_section_label(ui, "AMOUNT", theme);
    let mut amount = state.form.amount.clone();
    let response = forms::render_card(ui, theme, |ui| {
        forms::render_amount_input(ui, &mut amount, state.form.base.symbol(), theme)
    })
    .inner;
    if response.changed() {
        app.handle_amount_changed(amount);
    }
    let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(16.0);

    // Currency pair
    ui.columns(3, |columns| {
        forms::render_section_label(&mut columns[0], "FROM", theme);
        forms::render_card(&mut columns[0], theme, |ui| {
            if let Some(code) = currency_picker::render_currency_picker(ui, "base_currency", state.form.base, theme) {
                app.handle_base_currency_selected(code);
            }
        });

        columns[1].vertical_centered(|ui| {
            ui.add_space(22.0);
            let swap = egui::Button::new(RichText::new("⇄").size(18.0).color(theme.accent))
                .fill(theme.card)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .min_size(egui::vec2(44.0, 44.0));
            if ui.add(swap).on_hover_text("Swap currencies").clicked() {
                app.handle_swap_click();
            }
        });

        forms::render_section_label(&mut columns[2], "TO", theme);
        forms::render_card(&mut columns[2], theme, |ui| {
            if let Some(code) = currency_picker::render_currency_picker(ui, "target_currency", state.form.target, theme) {
                app.handle_target_currency_selected(code);
            }
        });
    });

    ui.add_space(24.0);

    // Convert
    let label = if state.convert_busy { BUSY_LABEL } else { CONVERT_LABEL };
    let convert = egui::Button::new(RichText::new(label).size(14.0).strong().color(theme.background))
        .fill(theme.accent)
        .min_size(egui::vec2(ui.available_width(), 44.0));
    let convert_clicked = ui.add_enabled(!state.convert_busy, convert).clicked();
    if convert_clicked || (enter_pressed && !state.convert_busy) {
        app.handle_convert_click();
    }

    ui.add_space(28.0);
    forms::render_divider(ui, theme);
    ui.add_space(20.0);

    result_panel::render_result_panel(ui, state, theme);

    ui.add_space(24.0);
    forms::render_divider(ui, theme);
    ui.add_space(10.0);

    // Quick amounts
    forms::render_section_label(ui, "QUICK AMOUNTS", theme);
    ui.add_space(8.0);
    if let Some(preset) = quick_amounts::render_quick_amounts(ui, theme) {
        app.handle_quick_amount_click(preset);
    }
}
