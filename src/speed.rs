use std::time::Duration;

use crate::config::{
    DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, TICK_INTERVAL_STEP_MS,
};

/// Bounded tick-interval control; a smaller interval is a faster game.
///
/// The control lives outside the game session, so the chosen speed survives
/// replays.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpeedControl {
    interval_ms: u64,
}

impl SpeedControl {
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL_MS)
    }

    /// Creates a control at `interval_ms`, clamped into the allowed range.
    #[must_use]
    pub fn with_interval(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        }
    }

    /// Shortens the interval by one step, stopping at the minimum.
    pub fn speed_up(&mut self) {
        self.interval_ms = self
            .interval_ms
            .saturating_sub(TICK_INTERVAL_STEP_MS)
            .max(MIN_TICK_INTERVAL_MS);
    }

    /// Lengthens the interval by one step, stopping at the maximum.
    pub fn slow_down(&mut self) {
        self.interval_ms = self
            .interval_ms
            .saturating_add(TICK_INTERVAL_STEP_MS)
            .min(MAX_TICK_INTERVAL_MS);
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Display rating: 10 at the slowest setting, 40 at the fastest.
    #[must_use]
    pub fn rating(&self) -> u32 {
        ((MAX_TICK_INTERVAL_MS as f64 / self.interval_ms as f64) * 10.0).round() as u32
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

    use super::SpeedControl;

    #[test]
    fn repeated_speed_up_stops_at_minimum() {
        let mut speed = SpeedControl::new();

        for _ in 0..50 {
            speed.speed_up();
        }

        assert_eq!(speed.interval_ms(), MIN_TICK_INTERVAL_MS);
    }

    #[test]
    fn repeated_slow_down_stops_at_maximum() {
        let mut speed = SpeedControl::new();

        for _ in 0..50 {
            speed.slow_down();
        }

        assert_eq!(speed.interval_ms(), MAX_TICK_INTERVAL_MS);
    }

    #[test]
    fn rating_covers_the_full_range() {
        assert_eq!(SpeedControl::new().rating(), 20);
        assert_eq!(SpeedControl::with_interval(MIN_TICK_INTERVAL_MS).rating(), 40);
        assert_eq!(SpeedControl::with_interval(MAX_TICK_INTERVAL_MS).rating(), 10);
    }

    #[test]
    fn with_interval_clamps_out_of_range_values() {
        assert_eq!(
            SpeedControl::with_interval(10).interval_ms(),
            MIN_TICK_INTERVAL_MS
        );
        assert_eq!(
            SpeedControl::with_interval(10_000).interval_ms(),
            MAX_TICK_INTERVAL_MS
        );
    }
}
