use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{OffsetContext, OffsetSource};
use crate::options::{Options, ShakeOptions};
use crate::util::falloff::Falloff;

/// One timed shake: random jitter scaled per axis and faded by `falloff`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeImpulse {
    /// Largest displacement per world axis.
    pub amplitude: Vec3,
    /// Lifetime in seconds.
    pub duration: f32,
    /// How the amplitude decays over the lifetime.
    pub falloff: Falloff,
}

impl ShakeImpulse {
    /// An impulse with the default falloff.
    #[must_use]
    pub fn new(amplitude: Vec3, duration: f32) -> Self {
        Self {
            amplitude,
            duration,
            falloff: Falloff::DEFAULT,
        }
    }

    /// Replace the falloff curve.
    #[must_use]
    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    fn is_valid(&self) -> bool {
        self.amplitude.is_finite() && self.duration.is_finite() && self.duration > 0.0
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveImpulse {
    impulse: ShakeImpulse,
    elapsed: f32,
}

/// Screen shake from timed impulses plus a decaying trauma level.
///
/// Impulses shake along world axes. Trauma shakes in the camera's image
/// plane with strength `trauma²`, so small hits barely register and big
/// ones dominate. Jitter comes from a seeded generator, so two shakes
/// built with the same seed produce identical offsets.
#[derive(Debug, Clone)]
pub struct ScreenShake {
    options: ShakeOptions,
    rng: SmallRng,
    impulses: Vec<ActiveImpulse>,
    trauma: f32,
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self::new(ShakeOptions::default())
    }
}

impl ScreenShake {
    /// Create an idle shake.
    #[must_use]
    pub fn new(options: ShakeOptions) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(options.seed),
            options,
            impulses: Vec::new(),
            trauma: 0.0,
        }
    }

    /// Start a timed impulse. Impulses with a non-positive or non-finite
    /// duration, or a non-finite amplitude, are ignored.
    pub fn shake(&mut self, impulse: ShakeImpulse) {
        if !impulse.is_valid() {
            log::warn!("ignoring malformed shake impulse {impulse:?}");
            return;
        }
        self.impulses.push(ActiveImpulse {
            impulse,
            elapsed: 0.0,
        });
    }

    /// Add trauma; the level is kept in [0, 1].
    pub fn add_trauma(&mut self, amount: f32) {
        if !amount.is_finite() {
            return;
        }
        self.trauma = (self.trauma + amount).min(1.0).max(0.0);
    }

    /// Current trauma level.
    #[must_use]
    pub fn trauma(&self) -> f32 {
        self.trauma
    }

    /// Trauma shake strength (trauma²).
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.trauma * self.trauma
    }

    /// Whether any impulse or trauma is still active.
    #[must_use]
    pub fn is_shaking(&self) -> bool {
        !self.impulses.is_empty() || self.trauma > 0.0
    }

    /// Drop all impulses and trauma.
    pub fn stop(&mut self) {
        self.impulses.clear();
        self.trauma = 0.0;
    }

    fn jitter(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.random_range(-1.0..=1.0),
            self.rng.random_range(-1.0..=1.0),
            self.rng.random_range(-1.0..=1.0),
        )
    }

    fn impulse_offset(&mut self, dt: f32) -> Vec3 {
        let mut total = Vec3::ZERO;
        for i in 0..self.impulses.len() {
            let jitter = self.jitter();
            let active = &mut self.impulses[i];
            let progress = active.elapsed / active.impulse.duration;
            let envelope = active.impulse.falloff.envelope(progress);
            total += active.impulse.amplitude * jitter * envelope;
            active.elapsed += dt;
        }
        self.impulses
            .retain(|active| active.elapsed < active.impulse.duration);
        total
    }

    fn trauma_offset(&mut self, ctx: &OffsetContext, dt: f32) -> Vec3 {
        if self.trauma <= 0.0 {
            return Vec3::ZERO;
        }
        let strength = self.intensity() * self.options.max_offset.max(0.0);
        let jitter = self.jitter();
        let in_view_plane = ctx.orientation * Vec3::new(jitter.x, jitter.y, 0.0);
        self.trauma =
            (self.trauma - self.options.trauma_decay.max(0.0) * dt).max(0.0);
        in_view_plane * strength
    }
}

impl OffsetSource for ScreenShake {
    fn offset(&mut self, ctx: &OffsetContext) -> Vec3 {
        if !self.options.enabled {
            self.stop();
            return Vec3::ZERO;
        }
        let dt = ctx.step();
        let impulses = self.impulse_offset(dt);
        impulses + self.trauma_offset(ctx, dt)
    }

    fn name(&self) -> &'static str {
        "screen_shake"
    }

    fn apply_options(&mut self, options: &Options) {
        if options.shake.seed != self.options.seed {
            self.rng = SmallRng::seed_from_u64(options.shake.seed);
        }
        self.options = options.shake.clone();
    }
}
