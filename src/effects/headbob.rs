use std::f32::consts::TAU;

use glam::Vec3;

use super::{OffsetContext, OffsetSource};
use crate::options::{HeadbobOptions, Options};

/// Figure-eight walking bob.
///
/// Lateral sway follows `sin(phase)` along the camera's right vector and
/// vertical bob follows `sin(2·phase)` along world up, so one step cycle
/// traces a figure eight. Strength follows the movement speed set by the
/// host and fades out linearly as the camera pulls back to
/// `fade_distance`.
#[derive(Debug, Clone)]
pub struct Headbob {
    options: HeadbobOptions,
    /// Normalized movement speed the intensity is heading for, in [0, 1].
    speed: f32,
    /// Current strength, trailing `speed`.
    intensity: f32,
    /// Position in the step cycle, radians in [0, TAU).
    phase: f32,
}

impl Default for Headbob {
    fn default() -> Self {
        Self::new(HeadbobOptions::default())
    }
}

impl Headbob {
    /// Create a bob at rest.
    #[must_use]
    pub fn new(options: HeadbobOptions) -> Self {
        Self {
            options,
            speed: 0.0,
            intensity: 0.0,
            phase: 0.0,
        }
    }

    /// Set the focus object's movement speed, normalized so 1.0 is a full
    /// walk. Values are clamped into [0, 1]; non-finite values stop the bob.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if speed.is_finite() {
            speed.min(1.0).max(0.0)
        } else {
            0.0
        };
    }

    /// Speed last set with [`set_speed`](Self::set_speed).
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current bob strength in [0, 1].
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Position in the step cycle, in radians.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    fn fade(&self, distance: f32) -> f32 {
        let fade_distance = self.options.fade_distance;
        if !fade_distance.is_finite() || fade_distance <= 0.0 {
            return 0.0;
        }
        (1.0 - distance / fade_distance).min(1.0).max(0.0)
    }

    fn follow_speed(&mut self, dt: f32) {
        let response = self.options.response;
        let blend = if !response.is_finite() || response <= 0.0 {
            1.0
        } else {
            1.0 - (-response * dt).exp()
        };
        self.intensity += (self.speed - self.intensity) * blend;
    }
}

impl OffsetSource for Headbob {
    fn offset(&mut self, ctx: &OffsetContext) -> Vec3 {
        if !self.options.enabled {
            self.intensity = 0.0;
            return Vec3::ZERO;
        }
        let dt = ctx.step();
        self.follow_speed(dt);

        let frequency = self.options.frequency.max(0.0);
        self.phase = (self.phase + TAU * frequency * self.intensity * dt).rem_euclid(TAU);
        if !self.phase.is_finite() {
            self.phase = 0.0;
        }

        let strength = self.intensity * self.fade(ctx.previous_distance);
        if strength <= 0.0 {
            return Vec3::ZERO;
        }
        let lateral = self.phase.sin() * self.options.lateral_amplitude;
        let vertical = (2.0 * self.phase).sin() * self.options.vertical_amplitude;
        let right = ctx.orientation * Vec3::X;
        (right * lateral + Vec3::Y * vertical) * strength
    }

    fn name(&self) -> &'static str {
        "headbob"
    }

    fn apply_options(&mut self, options: &Options) {
        self.options = options.headbob.clone();
    }
}
