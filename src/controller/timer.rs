use std::time::{Duration, Instant};

/// A cancellable fixed-interval timer polled by the event loop.
///
/// There is at most one pending deadline: starting a running timer does
/// nothing, cancelling a cancelled one does nothing.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedule the first tick one interval after `now`.
    ///
    /// Returns false if the timer was already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.interval);
        true
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Return true if a tick is due at `now` and schedule the next one.
    ///
    /// Late polls fire once; missed intervals are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
