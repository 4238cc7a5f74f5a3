//! Recurring callbacks for single-threaded hosts.
//!
//! The countdown never spawns threads. Instead it asks a [`Scheduler`] for a
//! recurring callback and the host decides when callbacks actually run. The
//! bundled [`IntervalScheduler`] is pumped from the UI frame loop; tests pump
//! it with explicit instants.

use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Identifies one scheduled recurring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Work run on every period.
pub type Task = Box<dyn FnMut()>;

#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    /// Runs `task` every `period` until cancelled.
    fn schedule(&self, period: Duration, task: Task) -> TimerHandle;

    /// Stops a task. Unknown or already-cancelled handles are ignored.
    fn cancel(&self, handle: TimerHandle);

    /// Number of tasks still scheduled.
    fn active_timers(&self) -> usize;
}

struct IntervalTimer {
    handle: TimerHandle,
    period: Duration,
    next_due: Instant,
    // Taken out while the task runs so it may re-enter the scheduler.
    task: Option<Task>,
}

/// Cooperative scheduler driven by [`IntervalScheduler::run_due_at`].
///
/// Timers fire on the thread that pumps the scheduler, in due order. A timer
/// that fell more than a period behind fires once and then restarts its
/// cadence from the pump instant; missed periods are not replayed.
pub struct IntervalScheduler {
    timers: RefCell<Vec<IntervalTimer>>,
    next_id: Cell<u64>,
    now: Cell<Instant>,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a scheduler whose notion of "now" starts at `origin`.
    pub fn starting_at(origin: Instant) -> Self {
        Self {
            timers: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            now: Cell::new(origin),
        }
    }

    /// Fires everything due as of the real monotonic clock.
    pub fn run_due(&self) -> usize {
        self.run_due_at(Instant::now())
    }

    /// Fires every timer due at `now` and returns how many tasks ran.
    pub fn run_due_at(&self, now: Instant) -> usize {
        if now > self.now.get() {
            self.now.set(now);
        }
        let now = self.now.get();

        let mut due = self
            .timers
            .borrow()
            .iter()
            .filter(|timer| timer.next_due <= now)
            .map(|timer| (timer.next_due, timer.handle))
            .collect::<Vec<_>>();
        due.sort_by_key(|(next_due, handle)| (*next_due, handle.0));

        let mut fired = 0;
        for (_, handle) in due {
            let task = {
                let mut timers = self.timers.borrow_mut();
                let Some(timer) = timers.iter_mut().find(|timer| timer.handle == handle) else {
                    // Cancelled by an earlier task in this pass.
                    continue;
                };
                let next = timer.next_due + timer.period;
                timer.next_due = if next <= now { now + timer.period } else { next };
                timer.task.take()
            };
            let Some(mut task) = task else {
                continue;
            };

            if catch_unwind(AssertUnwindSafe(|| task())).is_err() {
                log::error!("Scheduled task {:?} panicked; keeping it scheduled", handle);
            }
            fired += 1;

            if let Some(timer) = self
                .timers
                .borrow_mut()
                .iter_mut()
                .find(|timer| timer.handle == handle)
            {
                timer.task = Some(task);
            }
        }

        fired
    }

    /// Time until the earliest timer is due, or `None` when nothing is scheduled.
    pub fn next_due_in(&self) -> Option<Duration> {
        let now = self.now.get();
        self.timers
            .borrow()
            .iter()
            .map(|timer| timer.next_due.saturating_duration_since(now))
            .min()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&self, period: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);

        // A zero period would fire on every pump.
        let period = period.max(Duration::from_millis(1));
        self.timers.borrow_mut().push(IntervalTimer {
            handle,
            period,
            next_due: self.now.get() + period,
            task: Some(task),
        });
        log::debug!("Scheduled timer {:?} every {:?}", handle, period);
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut timers = self.timers.borrow_mut();
        let before = timers.len();
        timers.retain(|timer| timer.handle != handle);
        if timers.len() != before {
            log::debug!("Cancelled timer {:?}", handle);
        }
    }

    fn active_timers(&self) -> usize {
        self.timers.borrow().len()
    }
}
