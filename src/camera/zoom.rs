//! Distance smoothing between the current camera distance and the goal.

use crate::options::Options;

/// Capability the rig needs from a zoom component.
pub trait Zoom {
    /// Next camera distance.
    ///
    /// `actual` is last tick's distance, `clamped_max` the collision
    /// ceiling for this tick and `desired` the user's goal. Implementations
    /// must never return more than `clamped_max` when `clamped_max < actual`,
    /// so the camera cannot be pushed through a wall by smoothing.
    fn calculate_distance_from_target(
        &self,
        actual: f32,
        clamped_max: f32,
        desired: f32,
        dt: f32,
    ) -> f32;

    /// Pick up new options between ticks.
    fn apply_options(&mut self, _options: &Options) {}
}

/// Default [`Zoom`]: frame-rate independent exponential approach.
///
/// Moving outward (or inward towards a farther goal) eases in; moving
/// inward because the ceiling dropped below the current distance snaps.
#[derive(Debug, Clone, Copy)]
pub struct ZoomSmoother {
    smoothing_rate: f32,
}

impl Default for ZoomSmoother {
    fn default() -> Self {
        Self::new(crate::options::ZoomOptions::default().smoothing_rate)
    }
}

impl ZoomSmoother {
    /// Create a smoother that closes `1 - e^-rate` of the gap per second.
    #[must_use]
    pub fn new(smoothing_rate: f32) -> Self {
        Self { smoothing_rate }
    }

    /// Fraction of the remaining gap closed over `dt` seconds.
    fn blend_factor(&self, dt: f32) -> f32 {
        let rate = self.smoothing_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return 1.0;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        1.0 - (-rate * dt).exp()
    }
}

impl Zoom for ZoomSmoother {
    fn calculate_distance_from_target(
        &self,
        actual: f32,
        clamped_max: f32,
        desired: f32,
        dt: f32,
    ) -> f32 {
        if clamped_max < actual {
            return clamped_max;
        }
        let goal = desired.min(clamped_max);
        actual + (goal - actual) * self.blend_factor(dt)
    }

    fn apply_options(&mut self, options: &Options) {
        self.smoothing_rate = options.zoom.smoothing_rate;
    }
}
