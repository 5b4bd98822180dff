//! Additive look-at offsets: walking bob and screen shake.
//!
//! Offset sources are opaque to the rig. Each tick it asks every source
//! for a world-space displacement, adds them to the target tracker, and
//! clears them again once the camera position has been computed, so an
//! offset lives for exactly one tick.

use glam::{Quat, Vec3};

use crate::options::Options;

/// Walking bob.
pub mod headbob;
/// Impulse and trauma shake.
pub mod shake;

pub use headbob::Headbob;
pub use shake::{ScreenShake, ShakeImpulse};

/// What an offset source may look at when producing its offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetContext {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Camera distance persisted by the previous tick.
    pub previous_distance: f32,
    /// Camera orientation after this tick's rotation input.
    pub orientation: Quat,
}

impl OffsetContext {
    /// `dt` with non-finite and negative values treated as no time.
    #[must_use]
    pub fn step(&self) -> f32 {
        if self.dt.is_finite() {
            self.dt.max(0.0)
        } else {
            0.0
        }
    }
}

/// Produces one additive world-space offset per tick.
///
/// Implementations advance their own clock by `ctx.dt` on every call, so
/// the rig calls [`offset`](OffsetSource::offset) exactly once per active
/// tick.
pub trait OffsetSource {
    /// Advance by one tick and return this tick's displacement.
    fn offset(&mut self, ctx: &OffsetContext) -> Vec3;

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Pick up new options between ticks.
    fn apply_options(&mut self, _options: &Options) {}
}

impl<F> OffsetSource for F
where
    F: FnMut(&OffsetContext) -> Vec3,
{
    fn offset(&mut self, ctx: &OffsetContext) -> Vec3 {
        self(ctx)
    }
}
