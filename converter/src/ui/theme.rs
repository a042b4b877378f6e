//! # GUI Theme
//!
//! Dark theme with a muted gold accent for the converter window.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::app::ColorIntent;

/// Theme palette as plain RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Window background
    pub background: [u8; 3],
    /// Card and input fill
    pub card: [u8; 3],
    /// Card and input borders
    pub border: [u8; 3],
    /// Gold accent (title, buttons, rate line)
    pub accent: [u8; 3],
    /// Accent for hover and secondary labels
    pub accent_dim: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Secondary text
    pub text_secondary: [u8; 3],
    /// Successful conversion
    pub green: [u8; 3],
    /// Errors
    pub red: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [0x0D, 0x0D, 0x0D],
            card: [0x16, 0x16, 0x16],
            border: [0x2A, 0x2A, 0x2A],
            accent: [0xC8, 0xA9, 0x6E],
            accent_dim: [0x8A, 0x72, 0x48],
            text: [0xF0, 0xED, 0xE8],
            text_secondary: [0x88, 0x84, 0x80],
            green: [0x4C, 0xAF, 0x82],
            red: [0xE0, 0x5A, 0x5A],
        }
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Resolved colours used by the widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub card: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub accent_dim: Color32,
    /// Normal text color
    pub normal: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Theme {
            background: rgb(config.background),
            card: rgb(config.card),
            border: rgb(config.border),
            accent: rgb(config.accent),
            accent_dim: rgb(config.accent_dim),
            normal: rgb(config.text),
            dim: rgb(config.text_secondary),
            success: rgb(config.green),
            error: rgb(config.red),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from(&ThemeConfig::default())
    }
}

impl Theme {
    /// Colour for a result line.
    pub fn intent_color(&self, intent: ColorIntent) -> Color32 {
        match intent {
            ColorIntent::Normal => self.normal,
            ColorIntent::Success => self.success,
            ColorIntent::Error => self.error,
        }
    }

    /// Build egui Visuals from the palette.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.normal);

        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.faint_bg_color = self.card;
        visuals.extreme_bg_color = self.card;

        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.normal);

        visuals.widgets.inactive.bg_fill = self.card;
        visuals.widgets.inactive.weak_bg_fill = self.card;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);

        visuals.widgets.hovered.bg_fill = self.card;
        visuals.widgets.hovered.weak_bg_fill = self.card;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent_dim);

        visuals.widgets.active.bg_fill = self.accent_dim;
        visuals.widgets.active.weak_bg_fill = self.accent_dim;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.open.bg_fill = self.card;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.selection.bg_fill = self.accent_dim;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals
    }

    /// Apply the theme to an egui context.
    ///
    /// Uses `style_mut_of` for both egui themes so a system theme switch
    /// keeps the palette.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();

        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 8.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }

        tracing::debug!("Applied converter theme");
    }
}
