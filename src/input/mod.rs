//! Input handling: event types, the per-tick input record, and the
//! accumulator that turns raw device activity into look and zoom deltas.

/// Raw events to per-tick frames.
pub mod accumulator;
/// Platform-agnostic input events.
pub mod event;
/// The optional-field per-tick input record.
pub mod frame;
/// Key-bindable camera actions.
pub mod keyboard;

pub use accumulator::{InputAccumulator, InputSource};
pub use event::{InputEvent, MouseButton};
pub use frame::InputFrame;
pub use keyboard::KeyAction;
