use web_time::{Duration, Instant};

/// Longest step handed to the rig after a stall.
const MAX_STEP_SECONDS: f32 = 0.25;

/// Tick pacing with a smoothed tick-rate readout and optional rate limiting.
pub struct FrameTiming {
    /// Target ticks per second (0 = unlimited)
    target_hz: u32,
    /// Minimum tick duration based on the target rate
    min_tick_duration: Duration,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed tick rate using exponential moving average
    smoothed_rate: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new timer with the given tick-rate target (0 = unlimited).
    #[must_use]
    pub fn new(target_hz: u32) -> Self {
        let min_tick_duration = if target_hz > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_hz))
        } else {
            Duration::ZERO
        };

        Self {
            target_hz,
            min_tick_duration,
            last_tick: Instant::now(),
            smoothed_rate: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last tick.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        if self.target_hz == 0 {
            return true;
        }
        self.last_tick.elapsed() >= self.min_tick_duration
    }

    /// Time left until the next tick is due.
    #[must_use]
    pub fn until_next_tick(&self) -> Duration {
        self.min_tick_duration
            .saturating_sub(self.last_tick.elapsed())
    }

    /// Step length for a fixed-step loop at the target rate, or zero when
    /// unlimited.
    #[must_use]
    pub fn fixed_dt(&self) -> f32 {
        self.min_tick_duration.as_secs_f32()
    }

    /// Call after each tick. Returns the measured step in seconds, capped
    /// so a stalled process does not fling the camera.
    pub fn end_tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        let step = elapsed.as_secs_f32();
        if step > 0.0 {
            let instant_rate = 1.0 / step;
            self.smoothed_rate = self.smoothed_rate * (1.0 - self.smoothing)
                + instant_rate * self.smoothing;
        }
        step.min(MAX_STEP_SECONDS)
    }

    /// Current tick rate (smoothed).
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.smoothed_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_timer_always_ticks() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_tick());
        assert_eq!(timing.fixed_dt(), 0.0);
        assert_eq!(timing.until_next_tick(), Duration::ZERO);
    }

    #[test]
    fn fixed_dt_matches_target_rate() {
        let timing = FrameTiming::new(50);
        assert!((timing.fixed_dt() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn measured_steps_are_capped() {
        let mut timing = FrameTiming::new(60);
        let step = timing.end_tick();
        assert!((0.0..=MAX_STEP_SECONDS).contains(&step));
        assert!(timing.rate() > 0.0);
    }
}
