//! Component wiring for [`CameraRig`].

use super::{CameraRig, RigState};
use crate::camera::{
    CameraTransform, CollisionResolver, Rotation, RotationController,
    TargetTracker, Tracking, ViewCollision, Zoom, ZoomSmoother,
};
use crate::effects::{Headbob, OffsetSource, ScreenShake};
use crate::input::{InputAccumulator, InputSource};
use crate::options::Options;

/// Assembles a [`CameraRig`].
///
/// Every component left unset is built from the options with its default
/// implementation. The built-in [`Headbob`] and [`ScreenShake`] are only
/// installed when asked for; they run first, then the other offset sources
/// in the order they were added.
///
/// ```
/// use vantage::camera::RotationController;
/// use vantage::{Options, RigBuilder};
///
/// let options = Options::default();
/// let mut rotation = RotationController::new(&options.rotation);
/// rotation.subscribe(|event| log::debug!("crossed {event:?}"));
/// let rig = RigBuilder::new(options)
///     .with_rotation(rotation)
///     .with_default_effects()
///     .build();
/// assert!(!rig.is_active());
/// assert_eq!(rig.offset_source_names(), ["headbob", "screen_shake"]);
/// ```
pub struct RigBuilder {
    options: Options,
    rotation: Option<Box<dyn Rotation>>,
    zoom: Option<Box<dyn Zoom>>,
    collision: Option<Box<dyn ViewCollision>>,
    tracker: Option<Box<dyn Tracking>>,
    input: Option<Box<dyn InputSource>>,
    headbob: Option<Headbob>,
    shake: Option<ScreenShake>,
    offsets: Vec<Box<dyn OffsetSource>>,
}

impl RigBuilder {
    /// Start from `options` with no components chosen.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            rotation: None,
            zoom: None,
            collision: None,
            tracker: None,
            input: None,
            headbob: None,
            shake: None,
            offsets: Vec::new(),
        }
    }

    /// Use `rotation` instead of a [`RotationController`].
    #[must_use]
    pub fn with_rotation(mut self, rotation: impl Rotation + 'static) -> Self {
        self.rotation = Some(Box::new(rotation));
        self
    }

    /// Use `zoom` instead of a [`ZoomSmoother`].
    #[must_use]
    pub fn with_zoom(mut self, zoom: impl Zoom + 'static) -> Self {
        self.zoom = Some(Box::new(zoom));
        self
    }

    /// Use `collision` instead of a [`CollisionResolver`].
    #[must_use]
    pub fn with_collision(
        mut self,
        collision: impl ViewCollision + 'static,
    ) -> Self {
        self.collision = Some(Box::new(collision));
        self
    }

    /// Use `tracker` instead of a [`TargetTracker`].
    #[must_use]
    pub fn with_tracker(mut self, tracker: impl Tracking + 'static) -> Self {
        self.tracker = Some(Box::new(tracker));
        self
    }

    /// Use `input` instead of an [`InputAccumulator`].
    #[must_use]
    pub fn with_input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Append an offset source.
    #[must_use]
    pub fn with_offset_source(
        mut self,
        source: impl OffsetSource + 'static,
    ) -> Self {
        self.offsets.push(Box::new(source));
        self
    }

    /// Install `headbob` as the rig's walking bob.
    #[must_use]
    pub fn with_headbob(mut self, headbob: Headbob) -> Self {
        self.headbob = Some(headbob);
        self
    }

    /// Install `shake` as the rig's screen shake.
    #[must_use]
    pub fn with_shake(mut self, shake: ScreenShake) -> Self {
        self.shake = Some(shake);
        self
    }

    /// Install a [`Headbob`] and a [`ScreenShake`] configured from the
    /// options.
    #[must_use]
    pub fn with_default_effects(self) -> Self {
        let headbob = Headbob::new(self.options.headbob.clone());
        let shake = ScreenShake::new(self.options.shake.clone());
        self.with_headbob(headbob).with_shake(shake)
    }

    /// Finish the rig. It starts [`RigState::Unacquired`].
    #[must_use]
    pub fn build(self) -> CameraRig {
        let options = self.options;
        options.log_warnings();

        let rotation = self
            .rotation
            .unwrap_or_else(|| Box::new(RotationController::new(&options.rotation)));
        let zoom = self
            .zoom
            .unwrap_or_else(|| Box::new(ZoomSmoother::new(options.zoom.smoothing_rate)));
        let collision = self.collision.unwrap_or_else(|| {
            Box::new(CollisionResolver::new(options.collision.clone()))
        });
        let tracker = self
            .tracker
            .unwrap_or_else(|| Box::new(TargetTracker::new()));
        let input = self
            .input
            .unwrap_or_else(|| Box::new(InputAccumulator::from_options(&options)));

        let desired_distance = options.rig.clamp_distance(options.rig.desired_distance);
        log::debug!(
            "rig built: focus tag '{}', desired distance {desired_distance}, {} extra offset sources",
            options.rig.camera_focus_tag,
            self.offsets.len()
        );

        CameraRig {
            state: RigState::Unacquired,
            rotation,
            zoom,
            collision,
            tracker,
            input,
            headbob: self.headbob,
            shake: self.shake,
            offsets: self.offsets,
            desired_distance,
            previous_distance: desired_distance,
            transform: CameraTransform::default(),
            options,
        }
    }
}
