//! Focus objects and how the rig finds them.
//!
//! The rig never owns the object it follows. It holds a [`FocusHandle`],
//! which is allowed to stop resolving at any time (the object was
//! despawned); the rig notices on its next tick and goes back to searching
//! through a [`TargetResolver`].

use std::cell::Cell;
use std::rc::{Rc, Weak};

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

/// World-space pose of a focus object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPose {
    /// World-space position.
    pub position: Vec3,
    /// Orientation; only its yaw is used, to face the camera the same way
    /// as the object on acquisition.
    pub rotation: Quat,
}

impl Default for FocusPose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl FocusPose {
    /// Pose with the given position and rotation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with identity rotation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Heading in degrees, measured the same way as the rig's horizontal
    /// angle (clockwise seen from above, 0 looking down `-Z`).
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        let forward = self.rotation * Vec3::NEG_Z;
        forward.x.atan2(-forward.z).to_degrees()
    }
}

/// A possibly-dangling reference to a focus object.
pub trait FocusHandle {
    /// Current pose, or `None` once the object no longer exists.
    fn pose(&self) -> Option<FocusPose>;

    /// Whether the object still exists.
    fn is_valid(&self) -> bool {
        self.pose().is_some()
    }
}

/// Shared, mutable focus pose owned by the simulation.
pub type SharedFocus = Rc<Cell<FocusPose>>;

impl FocusHandle for Weak<Cell<FocusPose>> {
    fn pose(&self) -> Option<FocusPose> {
        self.upgrade().map(|cell| cell.get())
    }
}

/// Looks up focus objects by tag. Only consulted while the rig has no
/// valid focus.
pub trait TargetResolver {
    /// Find an object carrying `tag`.
    fn resolve(&self, tag: &str) -> Option<Box<dyn FocusHandle>>;
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Option<Box<dyn FocusHandle>>,
{
    fn resolve(&self, tag: &str) -> Option<Box<dyn FocusHandle>> {
        self(tag)
    }
}

/// Tag → focus registry backed by weak references.
///
/// Registering does not keep the object alive: dropping the last
/// [`SharedFocus`] both invalidates handles already given out and makes
/// the tag unresolvable.
#[derive(Debug, Default)]
pub struct TagRegistry {
    entries: FxHashMap<String, Weak<Cell<FocusPose>>>,
}

impl TagRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag `focus` as `tag`, replacing any earlier object with that tag.
    pub fn register(&mut self, tag: &str, focus: &SharedFocus) {
        let _ = self.entries.insert(tag.to_owned(), Rc::downgrade(focus));
    }

    /// Remove the tag. Handles already resolved stay valid while the
    /// object lives.
    pub fn unregister(&mut self, tag: &str) {
        let _ = self.entries.remove(tag);
    }

    /// Drop entries whose objects no longer exist.
    pub fn prune(&mut self) {
        self.entries.retain(|_, weak| weak.strong_count() > 0);
    }

    /// Number of registered tags (including dead ones not yet pruned).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tag is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TargetResolver for TagRegistry {
    fn resolve(&self, tag: &str) -> Option<Box<dyn FocusHandle>> {
        let weak = self.entries.get(tag)?;
        if weak.strong_count() == 0 {
            return None;
        }
        Some(Box::new(weak.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_follows_rotation_about_y() {
        let pose = FocusPose::new(
            Vec3::ZERO,
            Quat::from_rotation_y(-90.0_f32.to_radians()),
        );
        assert!((pose.yaw_degrees() - 90.0).abs() < 1e-4);
        assert!(FocusPose::default().yaw_degrees().abs() < 1e-6);
    }

    #[test]
    fn registry_resolves_live_objects_only() {
        let focus: SharedFocus =
            Rc::new(Cell::new(FocusPose::at(Vec3::new(1.0, 2.0, 3.0))));
        let mut registry = TagRegistry::new();
        registry.register("Player", &focus);

        let handle = registry.resolve("Player").unwrap();
        assert_eq!(handle.pose().unwrap().position, Vec3::new(1.0, 2.0, 3.0));
        assert!(registry.resolve("Enemy").is_none());

        drop(focus);
        assert!(!handle.is_valid());
        assert!(registry.resolve("Player").is_none());

        registry.prune();
        assert!(registry.is_empty());
    }

    #[test]
    fn handles_see_pose_updates() {
        let focus: SharedFocus = Rc::new(Cell::new(FocusPose::default()));
        let handle = Rc::downgrade(&focus);
        focus.set(FocusPose::at(Vec3::X));
        assert_eq!(handle.pose().unwrap().position, Vec3::X);
    }
}
