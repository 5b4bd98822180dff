use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings for stepping the camera.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ZoomIn` → `"Equal"`).
    pub bindings: FxHashMap<KeyAction, String>,
    /// Degrees turned per rotate key press.
    pub rotation_step: f32,
    /// Distance units moved per zoom key press.
    pub zoom_step: f32,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = [
            (KeyAction::RotateLeft, "KeyQ"),
            (KeyAction::RotateRight, "KeyE"),
            (KeyAction::RotateUp, "PageUp"),
            (KeyAction::RotateDown, "PageDown"),
            (KeyAction::ZoomIn, "Equal"),
            (KeyAction::ZoomOut, "Minus"),
        ]
        .into_iter()
        .map(|(action, key)| (action, key.to_owned()))
        .collect();

        let mut opts = Self {
            bindings,
            rotation_step: 15.0,
            zoom_step: 2.5,
            key_to_action: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
            && self.rotation_step == other.rotation_step
            && self.zoom_step == other.zoom_step
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind `action` to `key`, replacing any previous key for that action.
    pub fn bind(&mut self, action: KeyAction, key: &str) {
        let _ = self.bindings.insert(action, key.to_owned());
        self.rebuild_reverse_map();
    }
}
