// SPDX-License-Identifier: MPL-2.0
//! One-shot deadline timer evaluated on ticks.
//!
//! A `Timer` holds at most one pending deadline. Arming it replaces any
//! previous deadline, so a stale timer can never fire after a restart.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Arms the timer to fire `delay` after `from`, cancelling any pending deadline.
    ///
    /// A deadline past the range of `Instant` is never reached, so the timer
    /// stays idle.
    pub fn arm(&mut self, from: Instant, delay: Duration) {
        self.deadline = from.checked_add(delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Fires if the deadline has been reached.
    ///
    /// Returns the deadline that elapsed and disarms the timer, so each arming
    /// fires at most once.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, zero once elapsed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
