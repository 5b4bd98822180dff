/// One tick's worth of processed look and zoom input.
///
/// Every axis is optional: `None` means there was no activity on that axis
/// this tick, while `Some(0.0)` is an explicit zero. The rig only touches
/// rotation or desired distance for axes that are present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Yaw delta in degrees.
    pub horizontal: Option<f32>,
    /// Pitch delta in degrees.
    pub vertical: Option<f32>,
    /// Desired-distance delta for zooming in (normally negative).
    pub zoom_in: Option<f32>,
    /// Desired-distance delta for zooming out (normally positive).
    pub zoom_out: Option<f32>,
}

impl InputFrame {
    /// A frame with no activity on any axis.
    pub const EMPTY: Self = Self {
        horizontal: None,
        vertical: None,
        zoom_in: None,
        zoom_out: None,
    };

    /// Whether no axis carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Fold another frame into this one. Present values add up; an axis
    /// stays absent only if both sides are absent.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            horizontal: add_axis(self.horizontal, other.horizontal),
            vertical: add_axis(self.vertical, other.vertical),
            zoom_in: add_axis(self.zoom_in, other.zoom_in),
            zoom_out: add_axis(self.zoom_out, other.zoom_out),
        }
    }
}

fn add_axis(a: Option<f32>, b: Option<f32>) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + b),
        (a, None) => a,
        (None, b) => b,
    }
}
