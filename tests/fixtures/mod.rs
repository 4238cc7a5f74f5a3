// Test fixtures - reusable test data
// Provides a deterministic clock/scheduler pair wired into a controller

#![allow(dead_code)]

use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use baby_countdown::models::countdown::CountdownSnapshot;
use baby_countdown::models::settings::ArrivalPolicy;
use baby_countdown::services::countdown::{CountdownController, ManualClock};
use baby_countdown::services::scheduler::IntervalScheduler;
use chrono::{DateTime, Local, TimeZone};

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// One minute before 2099-01-01 local midnight
    pub fn minute_before_2099() -> DateTime<Local> {
        Local.with_ymd_and_hms(2098, 12, 31, 23, 59, 0).unwrap()
    }

    /// Today, as far as these tests are concerned
    pub fn mid_october_2026() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }
}

/// A controller whose time only moves when the test says so.
pub struct Harness {
    pub clock: Rc<ManualClock>,
    pub scheduler: Rc<IntervalScheduler>,
    pub controller: CountdownController,
    pub updates: Receiver<CountdownSnapshot>,
    origin: Instant,
    elapsed: Duration,
}

impl Harness {
    pub fn at(now: DateTime<Local>) -> Self {
        Self::with_policy(now, ArrivalPolicy::KeepTicking)
    }

    pub fn with_policy(now: DateTime<Local>, policy: ArrivalPolicy) -> Self {
        let origin = Instant::now();
        let clock = Rc::new(ManualClock::new(now));
        let scheduler = Rc::new(IntervalScheduler::starting_at(origin));
        let controller = CountdownController::with_policy(clock.clone(), scheduler.clone(), policy);
        let updates = controller.subscribe();

        Self {
            clock,
            scheduler,
            controller,
            updates,
            origin,
            elapsed: Duration::ZERO,
        }
    }

    /// Moves wall clock and scheduler forward one second at a time, returning
    /// how many ticks fired.
    pub fn advance_secs(&mut self, secs: u64) -> usize {
        let mut fired = 0;
        for _ in 0..secs {
            self.elapsed += Duration::from_secs(1);
            self.clock.advance(chrono::Duration::seconds(1));
            fired += self.scheduler.run_due_at(self.origin + self.elapsed);
        }
        fired
    }

    /// Everything published since the last drain.
    pub fn drain(&self) -> Vec<CountdownSnapshot> {
        self.updates.try_iter().collect()
    }
}
