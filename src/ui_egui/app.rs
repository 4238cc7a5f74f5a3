mod display;
mod form;

use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use self::form::FormState;
use super::backdrop::Backdrop;
use super::theme::CountdownTheme;
use crate::models::countdown::{CountdownPhase, CountdownSnapshot};
use crate::models::settings::AppConfig;
use crate::services::countdown::{CountdownController, SystemClock};
use crate::services::notification::NotificationService;
use crate::services::scheduler::IntervalScheduler;

/// Upper bound between repaints so the backdrop keeps moving.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub struct CountdownApp {
    config: AppConfig,
    theme: CountdownTheme,
    /// Pumped once per frame; drives the countdown tick
    scheduler: Rc<IntervalScheduler>,
    controller: CountdownController,
    updates: Receiver<CountdownSnapshot>,
    /// Last snapshot received from the controller
    latest: CountdownSnapshot,
    notifications: NotificationService,
    backdrop: Backdrop,
    form: FormState,
}

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let app = Self::with_config(config);
        app.theme.apply_to_context(&cc.egui_ctx);
        app
    }

    pub fn with_config(config: AppConfig) -> Self {
        let scheduler = Rc::new(IntervalScheduler::new());
        let controller = CountdownController::with_policy(
            Rc::new(SystemClock),
            scheduler.clone(),
            config.arrival_policy,
        );
        let updates = controller.subscribe();

        Self {
            theme: CountdownTheme::from_name(&config.theme),
            notifications: NotificationService::new(config.notify_on_arrival),
            backdrop: Backdrop::new(config.particle_count),
            latest: controller.snapshot(),
            form: FormState::default(),
            scheduler,
            controller,
            updates,
            config,
        }
    }

    fn drain_updates(&mut self) {
        while let Ok(snapshot) = self.updates.try_recv() {
            if self.notifications.observe(&snapshot) {
                if let Err(e) = self.notifications.show_arrival(&snapshot) {
                    log::warn!("Failed to show arrival notification: {}", e);
                }
            }
            self.latest = snapshot;
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        self.scheduler.run_due();
        self.drain_updates();

        let time = ctx.input(|i| i.time);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.backdrop
                .paint(ui.painter(), ui.max_rect(), time, self.theme.particle);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(32.0);
                    match self.latest.phase {
                        CountdownPhase::Active => self.render_display(ui),
                        CountdownPhase::Unconfigured | CountdownPhase::Staged => {
                            self.render_form(ui)
                        }
                    }
                });
            });
        });

        // Pick up anything published by button handlers this frame.
        self.drain_updates();

        let wait = self
            .scheduler
            .next_due_in()
            .map_or(FRAME_INTERVAL, |due| due.min(FRAME_INTERVAL));
        ctx.request_repaint_after(wait);
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.reset();
        log::info!("Countdown window closed");
    }
}
