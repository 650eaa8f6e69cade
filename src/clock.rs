use std::time::{Duration, Instant};

/// A fixed-interval tick source.
///
/// The clock has no deadline while disarmed; arming it schedules the next tick
/// one period from the moment of arming.  Firing clears the deadline, so the
/// following tick is scheduled when the clock is next armed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Clock {
    period: Duration,
    next_tick: Option<Instant>,
}

impl Clock {
    /// Create a disarmed clock
    pub(crate) fn new(period: Duration) -> Clock {
        Clock {
            period,
            next_tick: None,
        }
    }

    /// Schedule a tick one period after `now`, unless one is already
    /// scheduled
    pub(crate) fn arm(&mut self, now: Instant) {
        if self.next_tick.is_none() {
            self.next_tick = Some(now + self.period);
        }
    }

    pub(crate) fn disarm(&mut self) {
        self.next_tick = None;
    }

    pub(crate) fn armed(&self) -> bool {
        self.next_tick.is_some()
    }

    /// How long until the next tick is due.  Returns `None` if the clock is
    /// disarmed and `Some(Duration::ZERO)` if the tick is overdue.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|when| when.saturating_duration_since(now))
    }

    /// Consume the pending tick if it is due, returning whether it was
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        if self.next_tick.is_some_and(|when| when <= now) {
            self.next_tick = None;
            true
        } else {
            false
        }
    }
}
