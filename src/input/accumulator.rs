//! Folds raw platform events into per-tick [`InputFrame`]s.
//!
//! The device side pushes events at whatever rate it polls. The rig pulls
//! exactly once per tick: [`InputSource::append_input`], then
//! [`InputSource::processed_input`], then [`InputSource::clear_input`].
//! Skipping the clear makes the next tick consume the same input again.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};
use super::frame::InputFrame;
use super::keyboard::KeyAction;
use crate::options::{InputOptions, KeybindingOptions, Options};

/// Capability the rig needs from an input device adapter.
pub trait InputSource {
    /// Feed one raw platform event. Sources that script their frames
    /// directly can ignore events.
    fn handle_event(&mut self, _event: InputEvent) {}

    /// Feed one key press, identified by its physical key string
    /// (`"KeyQ"`, `"Equal"`, ...).
    fn handle_key_press(&mut self, _key: &str) {}

    /// Move everything received since the last call into the processed
    /// frame.
    fn append_input(&mut self);

    /// The processed frame for this tick.
    fn processed_input(&self) -> InputFrame;

    /// Forget the processed frame.
    fn clear_input(&mut self);

    /// Pick up new options between ticks.
    fn apply_options(&mut self, _options: &Options) {}
}

/// Default [`InputSource`]: maps pointer motion, scroll and bound keys onto
/// look and zoom deltas.
#[derive(Debug, Clone)]
pub struct InputAccumulator {
    options: InputOptions,
    keybindings: KeybindingOptions,
    /// Mapped activity not yet appended.
    pending: InputFrame,
    /// Activity handed to the rig for the current tick.
    processed: InputFrame,
    last_cursor: Option<Vec2>,
    held: FxHashSet<MouseButton>,
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self::new(InputOptions::default(), KeybindingOptions::default())
    }
}

impl InputAccumulator {
    /// Create an accumulator with the given pointer mapping and bindings.
    #[must_use]
    pub fn new(options: InputOptions, keybindings: KeybindingOptions) -> Self {
        Self {
            options,
            keybindings,
            pending: InputFrame::EMPTY,
            processed: InputFrame::EMPTY,
            last_cursor: None,
            held: FxHashSet::default(),
        }
    }

    /// Create an accumulator from the input sections of `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.input.clone(), options.keybindings.clone())
    }

    /// Activity received since the last [`InputSource::append_input`].
    #[must_use]
    pub fn pending(&self) -> InputFrame {
        self.pending
    }

    fn rotation_enabled(&self) -> bool {
        self.options
            .rotate_button
            .is_none_or(|button| self.held.contains(&button))
    }

    fn push_look(&mut self, delta: Vec2) {
        if !self.rotation_enabled() {
            return;
        }
        let invert = if self.options.invert_vertical { -1.0 } else { 1.0 };
        self.pending = self.pending.merge(InputFrame {
            horizontal: Some(delta.x * self.options.horizontal_sensitivity),
            vertical: Some(delta.y * self.options.vertical_sensitivity * invert),
            ..InputFrame::EMPTY
        });
    }

    fn push_scroll(&mut self, delta: f32) {
        let step = -delta * self.options.zoom_sensitivity;
        let frame = if delta > 0.0 {
            InputFrame {
                zoom_in: Some(step),
                ..InputFrame::EMPTY
            }
        } else if delta < 0.0 {
            InputFrame {
                zoom_out: Some(step),
                ..InputFrame::EMPTY
            }
        } else {
            return;
        };
        self.pending = self.pending.merge(frame);
    }
}

impl InputSource for InputAccumulator {
    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                if let Some(last) = self.last_cursor.replace(pos) {
                    self.push_look(pos - last);
                }
            }
            InputEvent::Motion { dx, dy } => self.push_look(Vec2::new(dx, dy)),
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    let _ = self.held.insert(button);
                } else {
                    let _ = self.held.remove(&button);
                }
            }
            InputEvent::Scroll { delta } => self.push_scroll(delta),
        }
    }

    fn handle_key_press(&mut self, key: &str) {
        let Some(action) = self.keybindings.lookup(key) else {
            log::trace!("unbound key {key}");
            return;
        };
        let rot = self.keybindings.rotation_step;
        let zoom = self.keybindings.zoom_step;
        let frame = match action {
            KeyAction::RotateLeft => InputFrame {
                horizontal: Some(-rot),
                ..InputFrame::EMPTY
            },
            KeyAction::RotateRight => InputFrame {
                horizontal: Some(rot),
                ..InputFrame::EMPTY
            },
            KeyAction::RotateUp => InputFrame {
                vertical: Some(-rot),
                ..InputFrame::EMPTY
            },
            KeyAction::RotateDown => InputFrame {
                vertical: Some(rot),
                ..InputFrame::EMPTY
            },
            KeyAction::ZoomIn => InputFrame {
                zoom_in: Some(-zoom),
                ..InputFrame::EMPTY
            },
            KeyAction::ZoomOut => InputFrame {
                zoom_out: Some(zoom),
                ..InputFrame::EMPTY
            },
        };
        self.pending = self.pending.merge(frame);
    }

    fn append_input(&mut self) {
        self.processed = self.processed.merge(self.pending);
        self.pending = InputFrame::EMPTY;
    }

    fn processed_input(&self) -> InputFrame {
        self.processed
    }

    fn clear_input(&mut self) {
        self.processed = InputFrame::EMPTY;
    }

    fn apply_options(&mut self, options: &Options) {
        self.options = options.input.clone();
        self.keybindings = options.keybindings.clone();
    }
}
