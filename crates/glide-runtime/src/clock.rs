//! Frame clock with a clamped delta time

use std::time::Instant;

/// Tracks elapsed time between rendered frames
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Upper bound on a single frame's delta (default: 250ms)
    pub max_delta: f64,
    /// Number of frames ticked so far
    pub frame: u64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            max_delta: 0.25,
            frame: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    /// Create a new frame clock with the default 250ms delta cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame clock with a custom delta cap in seconds
    pub fn with_max_delta(max_delta: f64) -> Self {
        Self {
            max_delta,
            ..Self::default()
        }
    }

    /// Advance the clock from the wall clock. Call once per frame.
    ///
    /// The first tick reports a zero delta so nothing jumps on startup.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.frame += 1;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed)
    }

    /// Advance the clock by a known step. Used by headless simulation.
    ///
    /// Negative or NaN steps count as zero; large steps are clamped to `max_delta`.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };
        // Clamp to avoid a huge catch-up step after a stall (e.g. tab switch)
        self.delta_time = dt.min(self.max_delta);
        self.total_time += self.delta_time;
        self.frame += 1;
        self.delta_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::new();
        assert!((clock.max_delta - 0.25).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 0);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 1);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(1.0 / 60.0);
        clock.advance(1.0 / 60.0);
        assert!((clock.total_time - 1.0 / 30.0).abs() < 1e-10);
        assert_eq!(clock.frame, 2);
    }

    #[test]
    fn test_advance_clamps_large_steps() {
        let mut clock = FrameClock::with_max_delta(0.1);
        assert!((clock.advance(5.0) - 0.1).abs() < 1e-10);
        assert_eq!(clock.advance(-1.0), 0.0);
        assert_eq!(clock.advance(f64::NAN), 0.0);
        assert!((clock.total_time - 0.1).abs() < 1e-10);
    }
}
