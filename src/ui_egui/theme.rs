//! Colours for the countdown window.

use egui::Color32;

#[derive(Debug, Clone, PartialEq)]
pub struct CountdownTheme {
    pub is_dark: bool,
    pub app_background: Color32,
    pub card_background: Color32,
    pub card_stroke: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub headline: Color32,
    pub particle: Color32,
}

/// Accent per unit card: days, hours, minutes, seconds.
pub const UNIT_ACCENTS: [Color32; 4] = [
    Color32::from_rgb(219, 39, 119),
    Color32::from_rgb(147, 51, 234),
    Color32::from_rgb(37, 99, 235),
    Color32::from_rgb(22, 163, 74),
];

/// Floating shape colours for the backdrop.
pub const SHAPE_COLORS: [Color32; 5] = [
    Color32::from_rgb(255, 105, 180),
    Color32::from_rgb(135, 206, 235),
    Color32::from_rgb(255, 215, 0),
    Color32::from_rgb(152, 251, 152),
    Color32::from_rgb(221, 160, 221),
];

impl CountdownTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(252, 231, 243),
            card_background: Color32::from_rgba_unmultiplied(255, 255, 255, 110),
            card_stroke: Color32::from_rgba_unmultiplied(255, 255, 255, 160),
            text_primary: Color32::from_rgb(55, 65, 81),
            text_secondary: Color32::from_rgb(107, 114, 128),
            headline: Color32::from_rgb(219, 39, 119),
            particle: Color32::from_rgb(255, 215, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 18, 43),
            card_background: Color32::from_rgba_unmultiplied(255, 255, 255, 24),
            card_stroke: Color32::from_rgba_unmultiplied(255, 255, 255, 60),
            text_primary: Color32::from_rgb(229, 231, 235),
            text_secondary: Color32::from_rgb(156, 163, 175),
            headline: Color32::from_rgb(244, 114, 182),
            particle: Color32::from_rgb(255, 215, 0),
        }
    }

    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
