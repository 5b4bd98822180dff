use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// How raw pointer activity maps onto look and zoom deltas.
pub struct InputOptions {
    /// Yaw degrees per pixel of horizontal cursor motion.
    #[schemars(title = "Horizontal Sensitivity", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub horizontal_sensitivity: f32,
    /// Pitch degrees per pixel of vertical cursor motion.
    #[schemars(title = "Vertical Sensitivity", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub vertical_sensitivity: f32,
    /// Distance units per scroll step.
    #[schemars(title = "Zoom Sensitivity", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub zoom_sensitivity: f32,
    /// Flip the pitch direction of cursor motion.
    #[schemars(title = "Invert Vertical")]
    pub invert_vertical: bool,
    /// Button that must be held for cursor motion to rotate the camera.
    /// `None` rotates on any motion (locked-cursor style).
    #[schemars(skip)]
    pub rotate_button: Option<MouseButton>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            horizontal_sensitivity: 0.25,
            vertical_sensitivity: 0.2,
            zoom_sensitivity: 2.0,
            invert_vertical: false,
            rotate_button: Some(MouseButton::Right),
        }
    }
}
