//! State queries and between-tick controls on [`CameraRig`].

use super::{CameraRig, RigState};
use crate::camera::{CameraTransform, Rotation, Tracking};
use crate::effects::{Headbob, OffsetSource, ScreenShake, ShakeImpulse};
use crate::input::InputEvent;
use crate::options::Options;

impl CameraRig {
    /// Current acquisition state.
    #[must_use]
    pub fn state(&self) -> RigState {
        self.state
    }

    /// Whether a focus object is being followed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == RigState::Active
    }

    /// Camera-to-target distance at the end of the last active tick.
    #[must_use]
    pub fn previous_distance(&self) -> f32 {
        self.previous_distance
    }

    /// Distance the camera is heading for.
    #[must_use]
    pub fn desired_distance(&self) -> f32 {
        self.desired_distance
    }

    /// Set the goal distance directly, clamped into
    /// `[min_zoom_distance, max_zoom_distance]` (and never negative).
    pub fn set_desired_distance(&mut self, distance: f32) {
        if !distance.is_finite() {
            log::warn!("ignoring non-finite desired distance");
            return;
        }
        let rig = &self.options.rig;
        self.desired_distance =
            rig.clamp_distance(distance.max(rig.min_zoom_distance));
    }

    /// Transform produced by the last active tick.
    #[must_use]
    pub fn transform(&self) -> &CameraTransform {
        &self.transform
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options and hand them to every component.
    ///
    /// Takes effect on the next tick. The desired distance is re-seeded from
    /// the new `rig.desired_distance`.
    pub fn set_options(&mut self, options: Options) {
        options.log_warnings();
        self.rotation.apply_options(&options);
        self.zoom.apply_options(&options);
        self.collision.apply_options(&options);
        self.input.apply_options(&options);
        if let Some(headbob) = &mut self.headbob {
            headbob.apply_options(&options);
        }
        if let Some(shake) = &mut self.shake {
            shake.apply_options(&options);
        }
        for source in &mut self.offsets {
            source.apply_options(&options);
        }
        self.desired_distance = options.rig.clamp_distance(options.rig.desired_distance);
        self.previous_distance = options.rig.clamp_distance(self.previous_distance);
        self.options = options;
    }

    /// Rotation component, for reading the current angles.
    #[must_use]
    pub fn rotation(&self) -> &dyn Rotation {
        self.rotation.as_ref()
    }

    /// Target component, for reading the focus and look-at point.
    #[must_use]
    pub fn tracker(&self) -> &dyn Tracking {
        self.tracker.as_ref()
    }

    /// Forward a raw platform event to the input component.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Forward a key press to the input component.
    pub fn handle_key_press(&mut self, key: &str) {
        self.input.handle_key_press(key);
    }

    /// The installed headbob, if any.
    pub fn headbob_mut(&mut self) -> Option<&mut Headbob> {
        self.headbob.as_mut()
    }

    /// The installed screen shake, if any.
    pub fn shake_mut(&mut self) -> Option<&mut ScreenShake> {
        self.shake.as_mut()
    }

    /// Tell the headbob how fast the focus is moving, `0.0..=1.0`.
    pub fn set_movement_speed(&mut self, speed: f32) {
        match &mut self.headbob {
            Some(headbob) => headbob.set_speed(speed),
            None => log::debug!("no headbob installed; ignoring movement speed"),
        }
    }

    /// Add trauma to the screen shake.
    pub fn add_trauma(&mut self, amount: f32) {
        match &mut self.shake {
            Some(shake) => shake.add_trauma(amount),
            None => log::debug!("no screen shake installed; ignoring trauma"),
        }
    }

    /// Start a shake impulse.
    pub fn shake(&mut self, impulse: ShakeImpulse) {
        match &mut self.shake {
            Some(shake) => shake.shake(impulse),
            None => log::debug!("no screen shake installed; ignoring impulse"),
        }
    }

    /// Append an offset source; it runs after the existing ones.
    pub fn add_offset_source(&mut self, source: impl OffsetSource + 'static) {
        log::debug!("adding offset source '{}'", source.name());
        self.offsets.push(Box::new(source));
    }

    /// Names of the installed offset sources, in evaluation order.
    #[must_use]
    pub fn offset_source_names(&self) -> Vec<&'static str> {
        let builtin = self
            .headbob
            .as_ref()
            .map(|h| h.name())
            .into_iter()
            .chain(self.shake.as_ref().map(|s| s.name()));
        builtin.chain(self.offsets.iter().map(|s| s.name())).collect()
    }

    /// Stop following the current focus and search again on the next tick.
    pub fn release_target(&mut self) {
        self.lose_target();
    }
}
