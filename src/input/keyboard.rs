use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// zoom_in = "Equal"
/// rotate_left = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Yaw left by one rotation step.
    RotateLeft,
    /// Yaw right by one rotation step.
    RotateRight,
    /// Pitch up (toward the horizon) by one rotation step.
    RotateUp,
    /// Pitch down (toward the focus) by one rotation step.
    RotateDown,
    /// Move the desired distance in by one zoom step.
    ZoomIn,
    /// Move the desired distance out by one zoom step.
    ZoomOut,
}
