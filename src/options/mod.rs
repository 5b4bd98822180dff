//! Centralized rig options with TOML preset support.
//!
//! All tweakable settings (viewing distance, rotation limits, smoothing,
//! collision margin, headbob, shake, input mapping, keybindings) are
//! consolidated here. Options serialize to/from TOML so a camera feel can
//! be saved as a preset and swapped between ticks.

mod collision;
mod effects;
mod input;
mod keybindings;
mod rig;
mod rotation;
mod zoom;

use std::path::Path;

pub use collision::CollisionOptions;
pub use effects::{HeadbobOptions, ShakeOptions};
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use rig::RigOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::ZoomOptions;

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Focus tag and viewing distances.
    pub rig: RigOptions,
    /// Look-angle limits and thresholds.
    pub rotation: RotationOptions,
    /// Distance smoothing.
    pub zoom: ZoomOptions,
    /// Line-of-sight probing.
    pub collision: CollisionOptions,
    /// Walking bob.
    pub headbob: HeadbobOptions,
    /// Screen shake.
    pub shake: ShakeOptions,
    /// Pointer mapping.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, VantageError> {
        let mut opts: Self = toml::from_str(content)?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Describe configuration the rig will have to clamp around.
    ///
    /// Malformed values never make the rig panic; this only surfaces them.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut found = Vec::new();
        let rig = &self.rig;
        if rig.min_zoom_distance > rig.max_zoom_distance {
            found.push(format!(
                "min_zoom_distance {} exceeds max_zoom_distance {}",
                rig.min_zoom_distance, rig.max_zoom_distance
            ));
        }
        if rig.min_zoom_distance < 0.0 || rig.max_zoom_distance < 0.0 {
            found.push("zoom distances must not be negative".to_owned());
        }
        if rig.desired_distance < 0.0
            || rig.desired_distance > rig.max_zoom_distance
        {
            found.push(format!(
                "desired_distance {} lies outside [0, {}]",
                rig.desired_distance, rig.max_zoom_distance
            ));
        }
        if self.rotation.vertical_min > self.rotation.vertical_max {
            found.push(format!(
                "vertical_min {} exceeds vertical_max {}",
                self.rotation.vertical_min, self.rotation.vertical_max
            ));
        }
        if self.collision.margin < 0.0 {
            found.push("collision margin must not be negative".to_owned());
        }
        found
    }

    /// Log every finding of [`warnings`](Self::warnings) at `warn` level.
    pub fn log_warnings(&self) {
        for msg in self.warnings() {
            log::warn!("options: {msg}");
        }
    }
}
