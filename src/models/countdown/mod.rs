//! Countdown value types shared by the engine and the display layer.
//!
//! Everything here is plain data: the controller produces these values and
//! hands out clones, observers never mutate them.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate};

use crate::utils::date::local_start_of_day;

/// Headline shown when no label was entered.
pub const DEFAULT_HEADLINE: &str = "Baby is Coming!";

/// Banner text rendered once the countdown reaches zero.
pub const ARRIVED_BANNER: &str = "Welcome to the world, little one!";

/// A calendar day the countdown runs to, anchored at local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate {
    date: NaiveDate,
    starts_at: DateTime<Local>,
}

impl TargetDate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            starts_at: local_start_of_day(date),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The instant the countdown reaches zero.
    pub fn starts_at(&self) -> DateTime<Local> {
        self.starts_at
    }
}

/// Non-negative time span split into days and clock units.
///
/// Hours, minutes and seconds always stay below 24, 60 and 60; days are
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingDuration {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// True once the target instant has been reached or passed.
    pub fn is_arrived(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Coarse lifecycle position of a countdown, as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// Nothing entered yet, or the countdown was reset.
    #[default]
    Unconfigured,
    /// A date has been accepted but the countdown is not running.
    Staged,
    /// Ticking once per second.
    Active,
}

/// What the display layer receives on every publish.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountdownSnapshot {
    pub phase: CountdownPhase,
    pub remaining: RemainingDuration,
    pub label: String,
    pub target: Option<NaiveDate>,
}

impl CountdownSnapshot {
    pub fn is_active(&self) -> bool {
        self.phase == CountdownPhase::Active
    }

    /// Active and already at zero.
    pub fn has_arrived(&self) -> bool {
        self.is_active() && self.remaining.is_arrived()
    }

    /// "{label} is Coming!" for a non-blank label, the default headline otherwise.
    pub fn headline(&self) -> String {
        let label = self.label.trim();
        if label.is_empty() {
            DEFAULT_HEADLINE.to_string()
        } else {
            format!("{label} is Coming!")
        }
    }
}
