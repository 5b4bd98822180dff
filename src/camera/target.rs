//! The look-at point: the focus object's position plus this tick's
//! additive offsets.

use glam::Vec3;

use crate::world::{FocusHandle, FocusPose};

/// Capability the rig needs from a target component.
///
/// Offsets are transient. They are accumulated during a tick, read once
/// when the camera position is computed, then cleared with
/// [`clear_additional_offsets`](Tracking::clear_additional_offsets).
/// Clearing before the read silently drops them for that tick.
pub trait Tracking {
    /// Follow `handle` from now on.
    fn set_target(&mut self, handle: Box<dyn FocusHandle>);

    /// Stop following anything.
    fn clear_target(&mut self);

    /// Whether a handle is installed and its object still exists.
    fn has_valid_target(&self) -> bool;

    /// Pose of the followed object, if it still exists.
    fn focus_pose(&self) -> Option<FocusPose>;

    /// Add a world-space displacement to this tick's look-at point.
    fn add_world_space_offset(&mut self, offset: Vec3);

    /// Sum of offsets added since the last clear.
    fn additional_offset(&self) -> Vec3;

    /// Reset the offset sum to zero.
    fn clear_additional_offsets(&mut self);

    /// Effective look-at point: focus position plus offsets.
    fn target(&self) -> Option<Vec3> {
        self.focus_pose()
            .map(|pose| pose.position + self.additional_offset())
    }

    /// Distance from `position` to the effective look-at point.
    fn distance_from_target(&self, position: Vec3) -> Option<f32> {
        self.target().map(|target| target.distance(position))
    }
}

/// Default [`Tracking`] implementation.
#[derive(Default)]
pub struct TargetTracker {
    handle: Option<Box<dyn FocusHandle>>,
    offset: Vec3,
}

impl TargetTracker {
    /// Create a tracker with nothing to follow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tracking for TargetTracker {
    fn set_target(&mut self, handle: Box<dyn FocusHandle>) {
        self.handle = Some(handle);
    }

    fn clear_target(&mut self) {
        self.handle = None;
        self.offset = Vec3::ZERO;
    }

    fn has_valid_target(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_valid())
    }

    fn focus_pose(&self) -> Option<FocusPose> {
        self.handle.as_ref().and_then(|h| h.pose())
    }

    fn add_world_space_offset(&mut self, offset: Vec3) {
        if !offset.is_finite() {
            log::warn!("ignoring non-finite target offset {offset}");
            return;
        }
        self.offset += offset;
    }

    fn additional_offset(&self) -> Vec3 {
        self.offset
    }

    fn clear_additional_offsets(&mut self) {
        self.offset = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::world::SharedFocus;

    fn tracker_on(focus: &SharedFocus) -> TargetTracker {
        let mut tracker = TargetTracker::new();
        tracker.set_target(Box::new(Rc::downgrade(focus)));
        tracker
    }

    #[test]
    fn target_includes_accumulated_offsets() {
        let focus: SharedFocus =
            Rc::new(Cell::new(FocusPose::at(Vec3::new(0.0, 1.0, 0.0))));
        let mut tracker = tracker_on(&focus);

        tracker.add_world_space_offset(Vec3::X);
        tracker.add_world_space_offset(Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(tracker.target(), Some(Vec3::new(1.5, 1.0, 0.0)));

        tracker.clear_additional_offsets();
        assert_eq!(tracker.target(), Some(Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn distance_is_measured_to_the_offset_point() {
        let focus: SharedFocus = Rc::new(Cell::new(FocusPose::default()));
        let mut tracker = tracker_on(&focus);
        tracker.add_world_space_offset(Vec3::new(0.0, 3.0, 0.0));
        let d = tracker.distance_from_target(Vec3::new(4.0, 3.0, 0.0));
        assert_eq!(d, Some(4.0));
    }

    #[test]
    fn dropped_focus_invalidates_tracker() {
        let focus: SharedFocus = Rc::new(Cell::new(FocusPose::default()));
        let tracker = tracker_on(&focus);
        assert!(tracker.has_valid_target());
        drop(focus);
        assert!(!tracker.has_valid_target());
        assert_eq!(tracker.target(), None);
        assert!(!TargetTracker::new().has_valid_target());
    }

    #[test]
    fn non_finite_offsets_are_rejected() {
        let mut tracker = TargetTracker::new();
        tracker.add_world_space_offset(Vec3::new(f32::NAN, 0.0, 0.0));
        assert_eq!(tracker.additional_offset(), Vec3::ZERO);
    }
}
