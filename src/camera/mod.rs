//! Camera components driven by the rig.
//!
//! Each component sits behind a small trait so the rig can be assembled
//! from replacement parts in tests or by embedders.

/// View obstruction against the world probe.
pub mod collision;
/// Yaw/pitch state and threshold events.
pub mod rotation;
/// Focus following and transient offsets.
pub mod target;
/// Camera pose and the sink it is written to.
pub mod transform;
/// Distance smoothing.
pub mod zoom;

pub use collision::{CollisionResolver, ViewCollision};
pub use rotation::{
    Crossing, Rotation, RotationAxis, RotationController, RotationEvent,
};
pub use target::{TargetTracker, Tracking};
pub use transform::{CameraTransform, TransformSink};
pub use zoom::{Zoom, ZoomSmoother};
