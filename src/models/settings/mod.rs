// Settings module
// Application configuration read from config.toml

use serde::{Deserialize, Serialize};

/// What the countdown does once it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalPolicy {
    /// Keep publishing the zero value every second.
    #[default]
    KeepTicking,
    /// Publish zero once, then release the timer.
    StopTicking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: String,
    pub arrival_policy: ArrivalPolicy,
    pub notify_on_arrival: bool,
    pub particle_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Baby Countdown".to_string(),
            window_width: 900.0,
            window_height: 640.0,
            theme: "light".to_string(),
            arrival_policy: ArrivalPolicy::KeepTicking,
            notify_on_arrival: true,
            particle_count: 100,
        }
    }
}

impl AppConfig {
    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}
