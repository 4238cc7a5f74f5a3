//! The countdown state machine.
//!
//! A date is first staged with [`CountdownController::configure`] and only
//! starts ticking on [`CountdownController::start`]. Every state change and
//! every tick sends a [`CountdownSnapshot`] to all subscribers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use super::calculator::compute;
use super::clock::Clock;
use super::error::CountdownError;
use crate::models::countdown::{CountdownPhase, CountdownSnapshot, RemainingDuration, TargetDate};
use crate::models::settings::ArrivalPolicy;
use crate::services::scheduler::{Scheduler, TimerHandle};
use crate::utils::date::parse_date_input;

/// Fixed tick period.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
enum CountdownState {
    Unconfigured,
    Staged {
        target: TargetDate,
        label: String,
    },
    Active {
        target: TargetDate,
        label: String,
        // None once a StopTicking policy has released the timer.
        timer: Option<TimerHandle>,
    },
}

impl CountdownState {
    fn phase(&self) -> CountdownPhase {
        match self {
            Self::Unconfigured => CountdownPhase::Unconfigured,
            Self::Staged { .. } => CountdownPhase::Staged,
            Self::Active { .. } => CountdownPhase::Active,
        }
    }

    fn timer(&self) -> Option<TimerHandle> {
        match self {
            Self::Active { timer, .. } => *timer,
            _ => None,
        }
    }
}

struct Shared {
    state: RefCell<CountdownState>,
    latest: RefCell<CountdownSnapshot>,
    subscribers: RefCell<Vec<Sender<CountdownSnapshot>>>,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn Scheduler>,
    arrival_policy: ArrivalPolicy,
}

impl Shared {
    fn snapshot_with(&self, remaining: RemainingDuration) -> CountdownSnapshot {
        match &*self.state.borrow() {
            CountdownState::Unconfigured => CountdownSnapshot::default(),
            CountdownState::Staged { target, label } => CountdownSnapshot {
                phase: CountdownPhase::Staged,
                remaining,
                label: label.clone(),
                target: Some(target.date()),
            },
            CountdownState::Active { target, label, .. } => CountdownSnapshot {
                phase: CountdownPhase::Active,
                remaining,
                label: label.clone(),
                target: Some(target.date()),
            },
        }
    }

    fn publish(&self, snapshot: CountdownSnapshot) {
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
        *self.latest.borrow_mut() = snapshot;
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.state.borrow().timer() {
            self.scheduler.cancel(handle);
        }
    }

    /// One recompute-and-publish cycle. Does nothing unless Active.
    fn tick(&self) {
        let target = match &*self.state.borrow() {
            CountdownState::Active { target, .. } => target.starts_at(),
            _ => return,
        };

        let remaining = compute(&target, &self.clock.now());
        self.publish(self.snapshot_with(remaining));

        if remaining.is_arrived() && self.arrival_policy == ArrivalPolicy::StopTicking {
            let mut state = self.state.borrow_mut();
            if let CountdownState::Active { timer, .. } = &mut *state {
                if let Some(handle) = timer.take() {
                    self.scheduler.cancel(handle);
                    log::info!("Countdown arrived; stopped ticking");
                }
            }
        }
    }
}

/// Owns the countdown state, its timer and its subscribers.
///
/// Dropping the controller cancels any running timer. The scheduled task only
/// holds a weak reference, so it becomes a no-op if it ever outlives the
/// controller.
pub struct CountdownController {
    shared: Rc<Shared>,
}

impl CountdownController {
    pub fn new(clock: Rc<dyn Clock>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self::with_policy(clock, scheduler, ArrivalPolicy::default())
    }

    pub fn with_policy(
        clock: Rc<dyn Clock>,
        scheduler: Rc<dyn Scheduler>,
        arrival_policy: ArrivalPolicy,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(CountdownState::Unconfigured),
                latest: RefCell::new(CountdownSnapshot::default()),
                subscribers: RefCell::new(Vec::new()),
                clock,
                scheduler,
                arrival_policy,
            }),
        }
    }

    /// Registers an observer. Each later publish is delivered to it.
    pub fn subscribe(&self) -> Receiver<CountdownSnapshot> {
        let (tx, rx) = mpsc::channel();
        self.shared.subscribers.borrow_mut().push(tx);
        rx
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> CountdownSnapshot {
        self.shared.latest.borrow().clone()
    }

    pub fn phase(&self) -> CountdownPhase {
        self.shared.state.borrow().phase()
    }

    /// Validates and stages a due date without starting the countdown.
    ///
    /// Staging while Active stops the running countdown; `start` must be
    /// called again to resume with the new date.
    pub fn configure(&mut self, date_text: &str, label: &str) -> Result<(), CountdownError> {
        let date = parse_date_input(date_text).ok_or_else(|| CountdownError::InvalidDate {
            input: date_text.to_string(),
        })?;

        self.shared.cancel_timer();
        *self.shared.state.borrow_mut() = CountdownState::Staged {
            target: TargetDate::new(date),
            label: label.to_string(),
        };
        log::info!("Staged countdown to {}", date);

        self.shared
            .publish(self.shared.snapshot_with(RemainingDuration::ZERO));
        Ok(())
    }

    /// Commits the staged date and begins ticking once per second.
    ///
    /// Publishes immediately. Calling it again while Active changes nothing.
    pub fn start(&mut self) -> Result<(), CountdownError> {
        let (target, label) = match &*self.shared.state.borrow() {
            CountdownState::Unconfigured => return Err(CountdownError::NotConfigured),
            CountdownState::Active { .. } => {
                log::debug!("start() while already active; keeping existing timer");
                return Ok(());
            }
            CountdownState::Staged { target, label } => (*target, label.clone()),
        };

        *self.shared.state.borrow_mut() = CountdownState::Active {
            target,
            label,
            timer: None,
        };
        self.shared.tick();

        // StopTicking may already have finished with a past date.
        let finished = self.shared.arrival_policy == ArrivalPolicy::StopTicking
            && self.shared.latest.borrow().remaining.is_arrived();
        if !finished {
            let weak: Weak<Shared> = Rc::downgrade(&self.shared);
            let handle = self.shared.scheduler.schedule(
                TICK_PERIOD,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.tick();
                    }
                }),
            );
            if let CountdownState::Active { timer, .. } = &mut *self.shared.state.borrow_mut() {
                *timer = Some(handle);
            }
        }

        log::info!("Countdown started to {}", target.date());
        Ok(())
    }

    /// Stops ticking, forgets the date and label and publishes zero.
    pub fn reset(&mut self) {
        self.shared.cancel_timer();
        *self.shared.state.borrow_mut() = CountdownState::Unconfigured;
        self.shared.publish(CountdownSnapshot::default());
        log::debug!("Countdown reset");
    }
}

impl Drop for CountdownController {
    fn drop(&mut self) {
        self.shared.cancel_timer();
    }
}
