//! Keeps the camera in front of whatever blocks the view of its focus.

use glam::Vec3;

use crate::options::{CollisionOptions, Options};
use crate::world::ProbeCaster;

/// Capability the rig needs from a view-collision component.
pub trait ViewCollision {
    /// Largest distance along `backward` from `target` that the camera can
    /// sit at without passing through geometry, never more than `desired`
    /// and never negative.
    fn calculate_maximum_distance_from_target(
        &self,
        probe: &dyn ProbeCaster,
        target: Vec3,
        backward: Vec3,
        desired: f32,
    ) -> f32;

    /// Pick up new options between ticks.
    fn apply_options(&mut self, _options: &Options) {}
}

/// Default [`ViewCollision`]: one probe from the target toward the camera.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver {
    options: CollisionOptions,
}

impl CollisionResolver {
    /// Create a resolver with the given margin and floor.
    #[must_use]
    pub fn new(options: CollisionOptions) -> Self {
        Self { options }
    }
}

impl ViewCollision for CollisionResolver {
    fn calculate_maximum_distance_from_target(
        &self,
        probe: &dyn ProbeCaster,
        target: Vec3,
        backward: Vec3,
        desired: f32,
    ) -> f32 {
        if !desired.is_finite() || desired <= 0.0 {
            return 0.0;
        }
        let direction = backward.normalize_or_zero();
        if !self.options.enabled || direction == Vec3::ZERO {
            return desired;
        }

        match probe.cast(target, direction, desired) {
            Some(hit) => {
                let margin = self.options.margin.max(0.0);
                let floor = self.options.min_distance.max(0.0);
                let safe = (hit - margin).max(floor).min(desired);
                log::trace!("view blocked at {hit:.3}, clamping to {safe:.3}");
                safe
            }
            None => desired,
        }
    }

    fn apply_options(&mut self, options: &Options) {
        self.options = options.collision.clone();
    }
}
