use std::time::{Duration, Instant};

/// Fixed-cadence tick source for the game loop.
///
/// Inactive until started; the game loop stops it the moment the game ends
/// and restarts it on replay. The current time is passed in explicitly so
/// tests never sleep.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
    active: bool,
}

impl Ticker {
    /// Creates a stopped ticker with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
            active: false,
        }
    }

    /// Starts ticking; the first tick fires one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.active = true;
        self.last_tick = now;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Retargets the cadence; takes effect from the next tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Returns true when a tick is due, at most once per elapsed interval.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }

        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            return true;
        }

        false
    }
}
