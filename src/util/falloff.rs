//! Decay envelopes for time-limited offsets.
//!
//! An envelope starts at 1.0 when an effect begins and reaches 0.0 when it
//! expires. Shake impulses scale their amplitude by it every tick.

use serde::{Deserialize, Serialize};

/// Shape of the decay from full strength to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Falloff {
    /// Constant rate of decay.
    Linear,
    /// Fast initial drop, long tail.
    Quadratic,
    /// Holds near full strength, then eases out.
    SmoothStep,
    /// Cubic Hermite curve with configurable inner control points.
    /// Formula (progress form): c1·3t(1-t)² + c2·3(1-t)t² + t³
    Hermite {
        /// First inner control point.
        c1: f32,
        /// Second inner control point.
        c2: f32,
    },
}

impl Falloff {
    /// Default envelope for impulses.
    pub const DEFAULT: Self = Self::Quadratic;

    /// Remaining strength at `progress` through the effect's lifetime.
    ///
    /// `progress` is clamped to [0.0, 1.0]; a NaN progress counts as
    /// expired.
    #[inline]
    #[must_use]
    pub fn envelope(&self, progress: f32) -> f32 {
        let t = progress.min(1.0).max(0.0);
        let omt = 1.0 - t;
        match *self {
            Self::Linear => omt,
            Self::Quadratic => omt * omt,
            Self::SmoothStep => 1.0 - t * t * (3.0 - 2.0 * t),
            Self::Hermite { c1, c2 } => {
                1.0 - (c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t)
            }
        }
    }
}

impl Default for Falloff {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
