use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View Collision", inline)]
#[serde(default)]
/// Line-of-sight probe parameters.
pub struct CollisionOptions {
    /// Whether obstruction probing runs at all.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Gap kept between the camera and the first obstruction.
    #[schemars(title = "Safety Margin", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub margin: f32,
    /// Closest the camera may be pulled toward the focus by an
    /// obstruction, so it never sits exactly on the target.
    #[schemars(skip)]
    pub min_distance: f32,
}

impl Default for CollisionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            margin: 0.2,
            min_distance: 0.05,
        }
    }
}
