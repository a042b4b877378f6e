//! # GUI Rendering Framework
//!
//! The eframe window and the per-frame render pipeline.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::App;
use theme::{Theme, ThemeConfig};

/// Window icon, embedded at build time.
const ICON_PNG: &[u8] = include_bytes!("../../assets/currency-conversion.png");

/// Clock resolution; the header clock shows seconds.
const CLOCK_REPAINT_INTERVAL: Duration = Duration::from_secs(1);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held elsewhere, skip this frame
                ctx.request_repaint();
                return;
            }
        }
    }; // Lock released here - rendering happens without holding lock

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme.background).inner_margin(egui::Margin::same(28)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                screens::converter::render(ui, &state, app, theme);
            });
        });
}

/// Decoded window icon, or `None` with a warning if the PNG cannot be decoded.
pub fn window_icon() -> Option<egui::IconData> {
    match eframe::icon_data::from_png_bytes(ICON_PNG) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!(error = %e, "Window icon could not be decoded");
            None
        }
    }
}

/// The native window.
pub struct ConverterWindow {
    app: App,
    theme: Theme,
}

impl ConverterWindow {
    /// Build the window, apply the theme, and hook background tasks up to repaint it.
    pub fn new(cc: &eframe::CreationContext<'_>, mut app: App, theme_config: ThemeConfig) -> Self {
        let theme = Theme::from(&theme_config);
        theme.apply(&cc.egui_ctx);
        app.set_repaint_context(cc.egui_ctx.clone());

        tracing::info!("Converter window created");

        Self { app, theme }
    }
}

impl eframe::App for ConverterWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        render(ctx, &mut self.app, &self.theme);
        ctx.request_repaint_after(CLOCK_REPAINT_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_icon_decodes() {
        let icon = window_icon().expect("embedded icon should decode");
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
    }
}
