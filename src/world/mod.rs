//! Everything outside the rig that a tick consults: the focus resolver and
//! the collision probe. Both are passed in per tick so the rig never holds
//! on to scene state.

/// Focus poses, handles and tag resolution.
pub mod focus;
/// Line-of-sight probe trait and analytic obstacles.
pub mod probe;

pub use focus::{
    FocusHandle, FocusPose, SharedFocus, TagRegistry, TargetResolver,
};
pub use probe::{NoObstruction, Obstacle, ObstacleSet, Plane, ProbeCaster, Sphere};

/// Per-tick view of the scene handed to
/// [`CameraRig::tick`](crate::rig::CameraRig::tick).
#[derive(Clone, Copy)]
pub struct World<'a> {
    /// Finds the focus object while the rig is searching.
    pub resolver: &'a dyn TargetResolver,
    /// Answers obstruction queries.
    pub probe: &'a dyn ProbeCaster,
}

impl<'a> World<'a> {
    /// Bundle a resolver and a probe.
    #[must_use]
    pub fn new(
        resolver: &'a dyn TargetResolver,
        probe: &'a dyn ProbeCaster,
    ) -> Self {
        Self { resolver, probe }
    }
}
