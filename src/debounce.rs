//! Trailing-edge debouncing for raw input events
//!
//! A pure state machine driven by caller-supplied timestamps: the host reports
//! each event with [`Debouncer::schedule`] and calls [`Debouncer::poll`] from its
//! timer or event loop. Each event bumps a revision and pushes the deadline
//! back, so a burst fires once, for its latest revision, after a quiet period.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    revision: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            revision: 0,
        }
    }

    /// Record an event at `now`, superseding any pending one
    pub fn schedule(&mut self, now: Instant) -> u64 {
        self.revision += 1;
        self.deadline = Some(now + self.delay);
        self.revision
    }

    /// When the pending event will fire
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the pending event if its quiet period is over.
    ///
    /// Returns the revision that fired.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                tracing::trace!("Debounced revision {} fired", self.revision);
                Some(self.revision)
            }
            _ => None,
        }
    }

    /// Fire the pending event now, regardless of the deadline
    pub fn take(&mut self) -> Option<u64> {
        self.deadline.take().map(|_| self.revision)
    }
}
