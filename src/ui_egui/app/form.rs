//! Configuration view: label, due date and the start button.

use chrono::Local;
use egui::{RichText, Ui};
use egui_extras::DatePickerButton;

use super::CountdownApp;
use crate::utils::date::{format_date_input, parse_date_input};

const CARD_ROUNDING: f32 = 16.0;
const FORM_WIDTH: f32 = 420.0;

/// Text the user is typing before the countdown starts.
#[derive(Debug, Clone, Default)]
pub(super) struct FormState {
    pub label: String,
    pub date_text: String,
    pub error: Option<String>,
}

impl FormState {
    pub fn can_start(&self) -> bool {
        !self.date_text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl CountdownApp {
    pub(super) fn render_form(&mut self, ui: &mut Ui) {
        let theme = self.theme.clone();
        egui::Frame::none()
            .fill(theme.card_background)
            .stroke(egui::Stroke::new(1.0, theme.card_stroke))
            .rounding(CARD_ROUNDING)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_max_width(FORM_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("👶 {} ❤", self.config.title))
                            .size(32.0)
                            .strong()
                            .color(theme.headline),
                    );
                    ui.label(
                        RichText::new("Set up your magical countdown to meet your little miracle")
                            .color(theme.text_secondary),
                    );
                });
                ui.add_space(16.0);

                ui.label(RichText::new("Baby's Name (Optional)").strong());
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.label)
                        .hint_text("Enter baby's name or leave blank")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label(RichText::new("Due Date").strong());
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.form.date_text)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(200.0),
                    );
                    if response.changed() {
                        self.form.error = None;
                    }

                    let mut picked = parse_date_input(&self.form.date_text)
                        .unwrap_or_else(|| Local::now().date_naive());
                    if ui
                        .add(DatePickerButton::new(&mut picked).id_source("due_date_picker"))
                        .changed()
                    {
                        self.form.date_text = format_date_input(picked);
                        self.form.error = None;
                    }
                });

                if let Some(error) = &self.form.error {
                    ui.colored_label(egui::Color32::from_rgb(220, 38, 38), error.as_str());
                }
                ui.add_space(16.0);

                let start = ui.add_enabled(
                    self.form.can_start(),
                    egui::Button::new(RichText::new("✨ Start the Magic Countdown").size(18.0))
                        .min_size(egui::vec2(ui.available_width(), 40.0)),
                );
                if start.clicked() {
                    self.start_countdown();
                }
            });
    }

    fn start_countdown(&mut self) {
        let result = self
            .controller
            .configure(&self.form.date_text, &self.form.label)
            .and_then(|()| self.controller.start());

        match result {
            Ok(()) => self.form.error = None,
            Err(e) => {
                log::warn!("Could not start countdown: {}", e);
                self.form.error = Some(e.to_string());
            }
        }
    }
}
