use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Headbob", inline)]
#[serde(default)]
/// Walking bob applied to the look-at point.
pub struct HeadbobOptions {
    /// Whether the bob offset is produced.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Step frequency in Hz at full movement speed.
    #[schemars(title = "Frequency", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub frequency: f32,
    /// Vertical bob amplitude in world units.
    #[schemars(title = "Vertical Amplitude", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub vertical_amplitude: f32,
    /// Side-to-side bob amplitude in world units.
    #[schemars(title = "Lateral Amplitude", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub lateral_amplitude: f32,
    /// Camera distance at which the bob has fully faded out.
    #[schemars(title = "Fade Distance", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub fade_distance: f32,
    /// Rate (1/s) at which bob intensity follows the movement speed.
    #[schemars(skip)]
    pub response: f32,
}

impl Default for HeadbobOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 1.8,
            vertical_amplitude: 0.08,
            lateral_amplitude: 0.04,
            fade_distance: 25.0,
            response: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Screen Shake", inline)]
#[serde(default)]
/// Trauma-driven shake applied to the look-at point.
pub struct ShakeOptions {
    /// Whether shake offsets are produced.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Largest trauma offset in world units (reached at trauma 1.0).
    #[schemars(title = "Max Offset", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub max_offset: f32,
    /// Trauma lost per second.
    #[schemars(title = "Trauma Decay", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub trauma_decay: f32,
    /// Seed for the jitter generator, so replays shake identically.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for ShakeOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            max_offset: 0.6,
            trauma_decay: 1.5,
            seed: 0x5EED,
        }
    }
}
