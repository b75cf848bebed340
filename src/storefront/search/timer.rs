//! Cancellable Debounce Timer
//!
//! A deadline cell polled from the frame loop. Scheduling again before the
//! deadline elapses replaces it, so a burst of events produces one firing
//! after the last event's delay (debounce, not throttle). Time is passed in
//! explicitly so tests control the clock.

use std::time::{Duration, Instant};

/// One logical debounce channel.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer: the deadline moves to `now + delay`,
    /// cancelling any pending firing.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once per armed deadline, when `now` has reached it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a firing is scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
