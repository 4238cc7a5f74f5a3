// Baby Countdown Application
// Main entry point

use anyhow::{anyhow, Result};
use baby_countdown::services::settings::ConfigService;
use baby_countdown::ui_egui::CountdownApp;

const MIN_WINDOW_WIDTH: f32 = 480.0;
const MIN_WINDOW_HEIGHT: f32 = 360.0;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Baby Countdown");

    let config_service = ConfigService::at_default_path();
    let config = config_service.load_or_create();
    log::info!("Using config from {}", config_service.path().display());

    let title = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("Failed to run application: {}", e))
}
