//! # Currency Picker Widget
//!
//! Drop-down over the supported currency list.

use egui::RichText;
use shared::{list_supported_currencies, CurrencyCode};

use crate::ui::theme::Theme;

/// Render a picker for `current`.
///
/// Returns the newly picked code, or `None` when the selection did not change.
pub fn render_currency_picker(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: CurrencyCode,
    theme: &Theme,
) -> Option<CurrencyCode> {
    let mut selected = current;

    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(RichText::new(current.as_str()).size(14.0).strong().color(theme.normal))
        .width(140.0)
        .show_ui(ui, |ui| {
            for code in list_supported_currencies() {
                ui.selectable_value(&mut selected, code, code.as_str());
            }
        });

    (selected != current).then_some(selected)
}
