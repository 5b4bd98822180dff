use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Distance smoothing parameters.
pub struct ZoomOptions {
    /// Exponential approach rate (1/s) used when the camera is free to
    /// move toward the desired distance. Retreat from obstruction is always
    /// immediate.
    #[schemars(title = "Smoothing Rate", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub smoothing_rate: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            smoothing_rate: 6.0,
        }
    }
}
