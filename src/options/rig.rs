use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rig", inline)]
#[serde(default)]
/// Focus lookup and viewing-distance parameters.
pub struct RigOptions {
    /// Tag of the object the camera should look at.
    #[schemars(title = "Focus Tag")]
    pub camera_focus_tag: String,
    /// Distance the camera wants to keep from the focus. Zoom input moves
    /// it within `[min_zoom_distance, max_zoom_distance]`.
    #[schemars(title = "Desired Distance", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub desired_distance: f32,
    /// Closest distance zooming in will reach.
    #[schemars(title = "Min Zoom", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub min_zoom_distance: f32,
    /// Farthest distance zooming out will reach. Every computed distance
    /// is clamped into `[0, max_zoom_distance]`.
    #[schemars(title = "Max Zoom", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub max_zoom_distance: f32,
    /// Pitch in degrees applied when a focus object is acquired.
    #[schemars(title = "Initial Pitch", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub initial_vertical_rotation: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            camera_focus_tag: "CameraFocus".to_owned(),
            desired_distance: 20.0,
            min_zoom_distance: 0.0,
            max_zoom_distance: 50.0,
            initial_vertical_rotation: 35.0,
        }
    }
}

impl RigOptions {
    /// Upper distance bound that is safe to clamp against even when the
    /// configured maximum is negative or NaN.
    #[must_use]
    pub fn distance_ceiling(&self) -> f32 {
        self.max_zoom_distance.max(0.0)
    }

    /// Clamp a distance into `[0, max_zoom_distance]`.
    ///
    /// Unlike [`f32::clamp`] this never panics on a malformed range.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.min(self.distance_ceiling()).max(0.0)
    }
}
