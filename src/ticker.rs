use std::time::{Duration, Instant};

/// Paces game logic to a fixed period, independent of how often input is
/// checked
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub(crate) fn new(period: Duration, now: Instant) -> Ticker {
        Ticker {
            period,
            last_tick: now,
        }
    }

    /// How long from `now` until the next tick is due.  Zero if it is due
    /// already.
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Start a new period as of `now`
    pub(crate) fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }
}
