//! Running countdown: headline, unit cards, arrived banner and reset.

use egui::{RichText, Ui};

use super::CountdownApp;
use crate::models::countdown::{RemainingDuration, ARRIVED_BANNER};
use crate::ui_egui::theme::{CountdownTheme, UNIT_ACCENTS};

const CARD_ROUNDING: f32 = 16.0;
const UNIT_CARD_WIDTH: f32 = 120.0;
const UNIT_LABELS: [&str; 4] = ["Days", "Hours", "Minutes", "Seconds"];

/// Values in the order the cards are laid out.
fn unit_values(remaining: &RemainingDuration) -> [u64; 4] {
    [
        remaining.days,
        u64::from(remaining.hours),
        u64::from(remaining.minutes),
        u64::from(remaining.seconds),
    ]
}

fn unit_card(ui: &mut Ui, theme: &CountdownTheme, value: u64, label: &str, accent: egui::Color32) {
    egui::Frame::none()
        .fill(theme.card_background)
        .stroke(egui::Stroke::new(1.0, theme.card_stroke))
        .rounding(CARD_ROUNDING)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(UNIT_CARD_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(value.to_string())
                        .size(44.0)
                        .monospace()
                        .strong()
                        .color(accent),
                );
                ui.label(RichText::new(label).size(16.0).strong());
            });
        });
}

impl CountdownApp {
    pub(super) fn render_display(&mut self, ui: &mut Ui) {
        let theme = self.theme.clone();
        let snapshot = self.latest.clone();

        ui.label(
            RichText::new(snapshot.headline())
                .size(40.0)
                .strong()
                .color(theme.headline),
        );
        ui.label(
            RichText::new("The most beautiful countdown has begun ✨")
                .size(18.0)
                .color(theme.text_secondary),
        );
        if let Some(target) = snapshot.target {
            ui.label(
                RichText::new(format!("Due {}", target.format("%A %-d %B %Y")))
                    .color(theme.text_secondary),
            );
        }
        ui.add_space(24.0);

        let values = unit_values(&snapshot.remaining);
        let row_width = (UNIT_CARD_WIDTH + 40.0) * values.len() as f32;
        ui.allocate_ui(egui::vec2(row_width, 140.0), |ui| {
            ui.horizontal(|ui| {
                for ((value, label), accent) in values.iter().zip(UNIT_LABELS).zip(UNIT_ACCENTS) {
                    unit_card(ui, &theme, *value, label, accent);
                }
            });
        });
        ui.add_space(24.0);

        if snapshot.has_arrived() {
            ui.label(
                RichText::new(format!("🎉 {} 🎉", ARRIVED_BANNER))
                    .size(32.0)
                    .strong()
                    .color(theme.headline),
            );
            ui.add_space(16.0);
        }

        ui.label(
            RichText::new(
                "Every moment brings you closer to holding your precious miracle. 💕",
            )
            .color(theme.text_primary),
        );
        ui.add_space(8.0);
        if ui.button("Reset Countdown").clicked() {
            self.controller.reset();
            self.form.clear();
        }
    }
}
