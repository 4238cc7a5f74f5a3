use anyhow::Result;
use notify_rust::{Notification, Timeout};

use crate::models::countdown::{CountdownSnapshot, ARRIVED_BANNER};

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
    // Set after the arrival notice fires; cleared when the countdown leaves Active.
    arrival_announced: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            arrival_announced: false,
        }
    }

    /// Feeds a published snapshot and returns true when it is the first
    /// arrival since the countdown started.
    pub fn observe(&mut self, snapshot: &CountdownSnapshot) -> bool {
        if !snapshot.is_active() {
            self.arrival_announced = false;
            return false;
        }
        if !snapshot.has_arrived() || self.arrival_announced {
            return false;
        }
        self.arrival_announced = true;
        self.enabled
    }

    /// Show the arrival notification for a countdown that just reached zero
    pub fn show_arrival(&self, snapshot: &CountdownSnapshot) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary(&snapshot.headline())
            .body(ARRIVED_BANNER)
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}
