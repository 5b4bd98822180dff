use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Look-angle limits and threshold notifications.
pub struct RotationOptions {
    /// Lowest pitch in degrees (negative looks up at the focus).
    #[schemars(title = "Min Pitch", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub vertical_min: f32,
    /// Highest pitch in degrees (positive looks down on the focus).
    #[schemars(title = "Max Pitch", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub vertical_max: f32,
    /// Pitch values that fire a rotation event when crossed.
    #[schemars(skip)]
    pub vertical_thresholds: Vec<f32>,
    /// Yaw values that fire a rotation event when crossed.
    #[schemars(skip)]
    pub horizontal_thresholds: Vec<f32>,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            vertical_min: -80.0,
            vertical_max: 85.0,
            vertical_thresholds: Vec::new(),
            horizontal_thresholds: Vec::new(),
        }
    }
}
