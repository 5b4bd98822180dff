//! The per-tick orchestrator.
//!
//! [`CameraRig`] owns one of each camera component behind its trait and
//! runs them in a fixed order every [`tick`](CameraRig::tick). While no
//! focus object is known it retries acquisition each tick and leaves the
//! output untouched.

mod accessors;
mod construction;

use glam::Vec3;

pub use self::construction::RigBuilder;
use crate::camera::{
    CameraTransform, Rotation, TransformSink, Tracking, ViewCollision, Zoom,
};
use crate::effects::{Headbob, OffsetContext, OffsetSource, ScreenShake};
use crate::input::InputSource;
use crate::options::Options;
use crate::world::{ProbeCaster, TargetResolver, World};

/// Acquisition state of the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigState {
    /// Searching for the focus object by tag.
    #[default]
    Unacquired,
    /// Following a live focus object.
    Active,
}

/// What a call to [`CameraRig::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No focus object found; nothing was computed or written.
    Waiting,
    /// A focus object was found this tick and a transform was written.
    Acquired,
    /// A transform was written.
    Updated,
    /// The focus object disappeared; the rig is searching again and
    /// nothing was written.
    TargetLost,
}

impl TickOutcome {
    /// Whether the sink received a transform during this tick.
    #[must_use]
    pub fn wrote_transform(self) -> bool {
        matches!(self, Self::Acquired | Self::Updated)
    }
}

/// Third-person camera rig.
///
/// Distances obey two invariants after every active tick:
/// `previous_distance` lies in `[0, max_zoom_distance]`, and it never
/// exceeds the collision ceiling computed during that tick.
pub struct CameraRig {
    options: Options,
    state: RigState,
    rotation: Box<dyn Rotation>,
    zoom: Box<dyn Zoom>,
    collision: Box<dyn ViewCollision>,
    tracker: Box<dyn Tracking>,
    input: Box<dyn InputSource>,
    headbob: Option<Headbob>,
    shake: Option<ScreenShake>,
    /// Extra offset sources, run after the built-in effects.
    offsets: Vec<Box<dyn OffsetSource>>,
    /// Distance the operator asked for via zoom input.
    desired_distance: f32,
    /// Camera-to-target distance at the end of the last active tick.
    previous_distance: f32,
    /// Last transform computed; only reaches the sink at the end of a tick.
    transform: CameraTransform,
}

impl CameraRig {
    /// Rig with the default component set for `options`, including the
    /// built-in headbob and screen shake.
    #[must_use]
    pub fn new(options: Options) -> Self {
        RigBuilder::new(options).with_default_effects().build()
    }

    /// Start assembling a rig with replacement components.
    #[must_use]
    pub fn builder(options: Options) -> RigBuilder {
        RigBuilder::new(options)
    }

    /// Advance the rig by `dt` seconds.
    ///
    /// At most one transform is written to `sink`, and only when the
    /// outcome is [`TickOutcome::Acquired`] or [`TickOutcome::Updated`].
    pub fn tick(
        &mut self,
        dt: f32,
        world: &World<'_>,
        sink: &mut dyn TransformSink,
    ) -> TickOutcome {
        let outcome = match self.state {
            RigState::Unacquired => {
                // Nothing received while searching carries over
                self.discard_input();
                if !self.try_acquire(world.resolver) {
                    return TickOutcome::Waiting;
                }
                TickOutcome::Acquired
            }
            RigState::Active => {
                if !self.tracker.has_valid_target() {
                    self.lose_target();
                    return TickOutcome::TargetLost;
                }
                TickOutcome::Updated
            }
        };

        if !self.update(dt, world.probe) {
            self.lose_target();
            return TickOutcome::TargetLost;
        }
        sink.apply(&self.transform);
        outcome
    }

    fn try_acquire(&mut self, resolver: &dyn TargetResolver) -> bool {
        let tag = self.options.rig.camera_focus_tag.as_str();
        let Some(handle) = resolver.resolve(tag) else {
            log::trace!("focus '{tag}' not found");
            return false;
        };
        let Some(pose) = handle.pose() else {
            log::debug!("focus '{tag}' resolved to a dropped object");
            return false;
        };

        self.rotation.rotate(
            pose.yaw_degrees(),
            self.options.rig.initial_vertical_rotation,
        );
        self.tracker.set_target(handle);
        self.tracker.clear_additional_offsets();
        self.previous_distance = self.options.rig.clamp_distance(self.desired_distance);
        self.state = RigState::Active;
        log::info!(
            "acquired focus '{tag}' at {} (yaw {:.1})",
            pose.position,
            pose.yaw_degrees()
        );
        true
    }

    fn discard_input(&mut self) {
        self.input.append_input();
        self.input.clear_input();
    }

    fn lose_target(&mut self) {
        if self.state == RigState::Active {
            log::info!(
                "lost focus '{}', searching again",
                self.options.rig.camera_focus_tag
            );
        }
        self.tracker.clear_target();
        self.state = RigState::Unacquired;
    }

    /// Run the active pipeline once. Returns `false` if the focus vanished
    /// before the target point could be read.
    fn update(&mut self, dt: f32, probe: &dyn ProbeCaster) -> bool {
        let rig = &self.options.rig;

        self.input.append_input();
        let frame = self.input.processed_input();
        self.input.clear_input();

        if let Some(h) = frame.horizontal {
            self.rotation.rotate_horizontally(h);
        }
        if let Some(v) = frame.vertical {
            self.rotation.rotate_vertically(v);
        }
        self.rotation.check_rotation_degrees_events();
        let orientation = self.rotation.orientation();

        let ctx = OffsetContext {
            dt,
            previous_distance: self.previous_distance,
            orientation,
        };
        if let Some(headbob) = &mut self.headbob {
            self.tracker.add_world_space_offset(headbob.offset(&ctx));
        }
        if let Some(shake) = &mut self.shake {
            self.tracker.add_world_space_offset(shake.offset(&ctx));
        }
        for source in &mut self.offsets {
            let offset = source.offset(&ctx);
            self.tracker.add_world_space_offset(offset);
        }

        if let Some(zi) = frame.zoom_in.filter(|z| z.is_finite()) {
            self.desired_distance =
                (self.desired_distance + zi).max(0.0).max(rig.min_zoom_distance);
        }
        if let Some(zo) = frame.zoom_out.filter(|z| z.is_finite()) {
            self.desired_distance =
                (self.desired_distance + zo).min(rig.max_zoom_distance);
        }

        let Some(target) = self.tracker.target() else {
            self.tracker.clear_additional_offsets();
            return false;
        };

        let forward = orientation * Vec3::NEG_Z;
        let clamped = self.collision.calculate_maximum_distance_from_target(
            probe,
            target,
            -forward,
            self.desired_distance.max(self.previous_distance),
        );

        let smoothed = self.zoom.calculate_distance_from_target(
            self.previous_distance,
            clamped,
            self.desired_distance,
            dt,
        );
        let distance = if smoothed.is_finite() {
            rig.clamp_distance(smoothed)
        } else {
            rig.clamp_distance(clamped.min(self.previous_distance))
        };

        let position = target - forward * distance;

        let ceiling = rig.distance_ceiling().min(clamped.max(0.0));
        self.previous_distance = self
            .tracker
            .distance_from_target(position)
            .unwrap_or(distance)
            .min(ceiling)
            .max(0.0);

        self.tracker.clear_additional_offsets();

        self.transform = CameraTransform::new(position, orientation);
        log::trace!(
            "tick dt={dt:.4} desired={:.3} clamped={clamped:.3} distance={:.3}",
            self.desired_distance,
            self.previous_distance
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use glam::Quat;

    use super::*;
    use crate::camera::TargetTracker;
    use crate::effects::ShakeImpulse;
    use crate::input::InputFrame;
    use crate::world::{
        FocusHandle, FocusPose, NoObstruction, SharedFocus, TagRegistry,
    };

    const DT: f32 = 1.0 / 60.0;

    type CallLog = Rc<RefCell<Vec<&'static str>>>;
    type FrameQueue = Rc<RefCell<VecDeque<InputFrame>>>;

    fn focus_at(position: Vec3) -> SharedFocus {
        Rc::new(Cell::new(FocusPose::at(position)))
    }

    fn registry_with(focus: &SharedFocus) -> TagRegistry {
        let mut registry = TagRegistry::new();
        registry.register("CameraFocus", focus);
        registry
    }

    fn tick(
        rig: &mut CameraRig,
        registry: &TagRegistry,
        probe: &dyn ProbeCaster,
        out: &mut CameraTransform,
    ) -> TickOutcome {
        rig.tick(DT, &World::new(registry, probe), out)
    }

    /// Replays queued frames, one per append, and records the calls the
    /// rig makes.
    #[derive(Default)]
    struct ScriptedInput {
        queue: FrameQueue,
        processed: InputFrame,
        calls: CallLog,
    }

    impl InputSource for ScriptedInput {
        fn append_input(&mut self) {
            self.calls.borrow_mut().push("append");
            let next = self.queue.borrow_mut().pop_front();
            self.processed = self.processed.merge(next.unwrap_or_default());
        }

        fn processed_input(&self) -> InputFrame {
            self.calls.borrow_mut().push("read");
            self.processed
        }

        fn clear_input(&mut self) {
            self.calls.borrow_mut().push("clear");
            self.processed = InputFrame::EMPTY;
        }
    }

    /// [`TargetTracker`] that records offset and target traffic.
    struct RecordingTracker {
        inner: TargetTracker,
        calls: CallLog,
    }

    impl Tracking for RecordingTracker {
        fn set_target(&mut self, handle: Box<dyn FocusHandle>) {
            self.inner.set_target(handle);
        }

        fn clear_target(&mut self) {
            self.inner.clear_target();
        }

        fn has_valid_target(&self) -> bool {
            self.inner.has_valid_target()
        }

        fn focus_pose(&self) -> Option<FocusPose> {
            self.inner.focus_pose()
        }

        fn add_world_space_offset(&mut self, offset: Vec3) {
            self.calls.borrow_mut().push("offset");
            self.inner.add_world_space_offset(offset);
        }

        fn additional_offset(&self) -> Vec3 {
            self.inner.additional_offset()
        }

        fn clear_additional_offsets(&mut self) {
            self.calls.borrow_mut().push("clear");
            self.inner.clear_additional_offsets();
        }

        fn target(&self) -> Option<Vec3> {
            self.calls.borrow_mut().push("target");
            self.inner.target()
        }

        fn distance_from_target(&self, position: Vec3) -> Option<f32> {
            self.calls.borrow_mut().push("distance");
            self.inner.distance_from_target(position)
        }
    }

    fn scripted_rig(options: Options) -> (CameraRig, FrameQueue, CallLog) {
        let input = ScriptedInput::default();
        let queue = Rc::clone(&input.queue);
        let calls = Rc::clone(&input.calls);
        let rig = RigBuilder::new(options).with_input(input).build();
        (rig, queue, calls)
    }

    #[test]
    fn missing_focus_leaves_sink_untouched() {
        let registry = TagRegistry::new();
        let mut rig = CameraRig::new(Options::default());
        let before = CameraTransform::new(Vec3::splat(9.0), Quat::IDENTITY);
        let mut out = before;

        for _ in 0..5 {
            let outcome = tick(&mut rig, &registry, &NoObstruction, &mut out);
            assert_eq!(outcome, TickOutcome::Waiting);
        }
        assert_eq!(out, before);
        assert_eq!(rig.state(), RigState::Unacquired);
    }

    #[test]
    fn acquisition_seeds_rotation_and_distance() {
        let focus = focus_at(Vec3::new(1.0, 2.0, 3.0));
        focus.set(FocusPose::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(-90f32.to_radians()),
        ));
        let registry = registry_with(&focus);
        let mut rig = CameraRig::new(Options::default());
        let mut out = CameraTransform::default();

        let outcome = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(outcome, TickOutcome::Acquired);
        assert!(rig.is_active());
        assert!((rig.rotation().horizontal_degrees() - 90.0).abs() < 1e-3);
        assert!((rig.rotation().vertical_degrees() - 35.0).abs() < 1e-4);
        assert!((rig.previous_distance() - 20.0).abs() < 1e-3);
        assert!((out.position.distance(Vec3::new(1.0, 2.0, 3.0)) - 20.0).abs() < 1e-3);
        assert_eq!(&out, rig.transform());
    }

    #[test]
    fn obstruction_clamps_within_the_same_tick() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let wall = |_: Vec3, _: Vec3, max: f32| (5.0 <= max).then_some(5.0_f32);
        let mut rig = CameraRig::new(Options::default());
        let mut out = CameraTransform::default();

        let margin = rig.options().collision.margin;
        let _ = tick(&mut rig, &registry, &wall, &mut out);
        assert!(rig.previous_distance() <= 5.0 - margin + 1e-5);
        assert!(out.position.length() <= 5.0 - margin + 1e-4);
    }

    #[test]
    fn distance_approaches_goal_without_overshoot() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let mut options = Options::default();
        options.rig.desired_distance = 0.0;
        let mut rig = CameraRig::new(options);
        let mut out = CameraTransform::default();

        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(rig.previous_distance(), 0.0);

        rig.set_desired_distance(20.0);
        let mut last = 0.0;
        for _ in 0..600 {
            let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
            let d = rig.previous_distance();
            assert!(d + 1e-4 >= last);
            assert!(d <= 20.0 + 1e-4);
            last = d;
        }
        assert!((last - 20.0).abs() < 1e-2);
    }

    #[test]
    fn empty_frames_change_nothing() {
        let focus = focus_at(Vec3::new(0.0, 1.0, 0.0));
        let registry = registry_with(&focus);
        let (mut rig, _queue, _calls) = scripted_rig(Options::default());
        let mut out = CameraTransform::default();

        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        let h = rig.rotation().horizontal_degrees();
        let v = rig.rotation().vertical_degrees();
        let desired = rig.desired_distance();
        let position = out.position;

        for _ in 0..30 {
            assert_eq!(
                tick(&mut rig, &registry, &NoObstruction, &mut out),
                TickOutcome::Updated
            );
        }
        assert_eq!(rig.rotation().horizontal_degrees(), h);
        assert_eq!(rig.rotation().vertical_degrees(), v);
        assert_eq!(rig.desired_distance(), desired);
        assert!(out.position.distance(position) < 1e-4);
    }

    #[test]
    fn zoom_input_respects_limits() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let mut options = Options::default();
        options.rig.min_zoom_distance = 4.0;
        let (mut rig, queue, _calls) = scripted_rig(options);
        let mut out = CameraTransform::default();
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);

        queue.borrow_mut().push_back(InputFrame {
            zoom_in: Some(-5.0),
            ..InputFrame::EMPTY
        });
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(rig.desired_distance(), 15.0);

        queue.borrow_mut().push_back(InputFrame {
            zoom_in: Some(-100.0),
            ..InputFrame::EMPTY
        });
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(rig.desired_distance(), 4.0);

        queue.borrow_mut().push_back(InputFrame {
            zoom_out: Some(100.0),
            ..InputFrame::EMPTY
        });
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(rig.desired_distance(), 50.0);
    }

    #[test]
    fn previous_distance_stays_in_bounds() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let (mut rig, queue, _calls) = scripted_rig(Options::default());
        let mut out = CameraTransform::default();
        let max = rig.options().rig.max_zoom_distance;

        for i in 0..200_u16 {
            let delta = f32::from(i % 7) * 9.0;
            queue.borrow_mut().push_back(InputFrame {
                horizontal: Some(13.0),
                vertical: Some(if i % 2 == 0 { 40.0 } else { -40.0 }),
                zoom_in: (i % 3 == 0).then_some(-delta),
                zoom_out: (i % 3 == 1).then_some(delta),
            });
            let wall_at = f32::from(i % 11) + 0.5;
            let wall = move |_: Vec3, _: Vec3, m: f32| (wall_at <= m).then_some(wall_at);
            let _ = tick(&mut rig, &registry, &wall, &mut out);
            let d = rig.previous_distance();
            assert!((0.0..=max).contains(&d), "tick {i}: {d}");
            assert!(d <= wall_at, "tick {i}: {d} beyond wall {wall_at}");
        }
    }

    #[test]
    fn target_loss_and_reacquisition() {
        let focus = focus_at(Vec3::ZERO);
        let mut registry = registry_with(&focus);
        let mut rig = CameraRig::new(Options::default());
        let writes = Cell::new(0);
        let mut sink = |_: &CameraTransform| writes.set(writes.get() + 1);
        let mut run = |rig: &mut CameraRig, registry: &TagRegistry| {
            rig.tick(DT, &World::new(registry, &NoObstruction), &mut sink)
        };

        assert_eq!(run(&mut rig, &registry), TickOutcome::Acquired);
        drop(focus);
        assert_eq!(run(&mut rig, &registry), TickOutcome::TargetLost);
        assert_eq!(rig.state(), RigState::Unacquired);
        assert_eq!(run(&mut rig, &registry), TickOutcome::Waiting);

        rig.set_desired_distance(12.0);
        let replacement = focus_at(Vec3::new(5.0, 0.0, 0.0));
        registry.register("CameraFocus", &replacement);
        assert_eq!(run(&mut rig, &registry), TickOutcome::Acquired);
        assert!((rig.previous_distance() - 12.0).abs() < 1e-3);
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn offsets_last_exactly_one_tick() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let calls = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&calls);
        let bump = move |_: &OffsetContext| {
            counter.set(counter.get() + 1);
            if counter.get() == 2 { Vec3::Y } else { Vec3::ZERO }
        };
        let mut rig = RigBuilder::new(Options::default())
            .with_offset_source(bump)
            .build();
        let mut out = CameraTransform::default();

        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        let rest = out.position;
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert!(out.position.distance(rest + Vec3::Y) < 1e-4);
        assert_eq!(rig.tracker().additional_offset(), Vec3::ZERO);
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert!(out.position.distance(rest) < 1e-4);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn offsets_are_cleared_after_the_position_read() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let calls: CallLog = Rc::default();
        let tracker = RecordingTracker {
            inner: TargetTracker::new(),
            calls: Rc::clone(&calls),
        };
        let mut rig = RigBuilder::new(Options::default())
            .with_tracker(tracker)
            .with_offset_source(|_: &OffsetContext| Vec3::X)
            .build();
        let mut out = CameraTransform::default();

        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        calls.borrow_mut().clear();
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(*calls.borrow(), ["offset", "target", "distance", "clear"]);
    }

    #[test]
    fn input_is_consumed_once_per_tick() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let (mut rig, _queue, calls) = scripted_rig(Options::default());
        let mut out = CameraTransform::default();

        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(
            *calls.borrow(),
            ["append", "clear", "append", "read", "clear"]
        );
        calls.borrow_mut().clear();
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(*calls.borrow(), ["append", "read", "clear"]);

        let mut rig = CameraRig::new(Options::default());
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        let start = rig.rotation().horizontal_degrees();
        rig.handle_key_press("KeyE");
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        let turned = rig.rotation().horizontal_degrees();
        assert!((turned - (start + 15.0)).abs() < 1e-3);
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert_eq!(rig.rotation().horizontal_degrees(), turned);
    }

    #[test]
    fn input_received_while_searching_is_discarded() {
        let mut registry = TagRegistry::new();
        let mut rig = CameraRig::new(Options::default());
        let mut out = CameraTransform::default();

        for _ in 0..10 {
            rig.handle_key_press("KeyE");
            rig.handle_key_press("Equal");
            assert_eq!(
                tick(&mut rig, &registry, &NoObstruction, &mut out),
                TickOutcome::Waiting
            );
        }

        let focus = focus_at(Vec3::ZERO);
        registry.register("CameraFocus", &focus);
        assert_eq!(
            tick(&mut rig, &registry, &NoObstruction, &mut out),
            TickOutcome::Acquired
        );
        assert!(rig.rotation().horizontal_degrees().abs() < 1e-3);
        assert_eq!(rig.desired_distance(), 20.0);
    }

    #[test]
    fn collision_length_covers_the_current_distance() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let (mut rig, queue, _calls) = scripted_rig(Options::default());
        let mut out = CameraTransform::default();
        let margin = rig.options().collision.margin;
        let lengths = RefCell::new(Vec::new());
        let open = |_: Vec3, _: Vec3, max: f32| {
            lengths.borrow_mut().push(max);
            None::<f32>
        };
        let wall = |_: Vec3, _: Vec3, max: f32| {
            lengths.borrow_mut().push(max);
            (10.0 <= max).then_some(10.0_f32)
        };

        let _ = tick(&mut rig, &registry, &open, &mut out);
        assert!((rig.previous_distance() - 20.0).abs() < 1e-3);

        queue.borrow_mut().push_back(InputFrame {
            zoom_in: Some(-15.0),
            ..InputFrame::EMPTY
        });
        let _ = tick(&mut rig, &registry, &open, &mut out);
        assert_eq!(rig.desired_distance(), 5.0);
        let last = lengths.borrow().last().copied().unwrap_or_default();
        assert!((last - 20.0).abs() < 1e-3, "{last}");

        let before = rig.previous_distance();
        assert!(before > 10.0);
        let _ = tick(&mut rig, &registry, &wall, &mut out);
        assert_eq!(lengths.borrow().last().copied(), Some(before));
        assert!(rig.previous_distance() <= 10.0 - margin + 1e-5);
        assert!(out.position.length() <= 10.0 - margin + 1e-4);
    }

    #[test]
    fn trauma_shakes_the_camera() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let mut rig = CameraRig::new(Options::default());
        let mut out = CameraTransform::default();
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        let rest = out.position;

        rig.add_trauma(1.0);
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert!(out.position.distance(rest) > 1e-3);
        let trauma = rig.shake_mut().map(|s| s.trauma());
        assert!(trauma.is_some_and(|t| t < 1.0), "{trauma:?}");

        if let Some(shake) = rig.shake_mut() {
            shake.stop();
        }
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert!(out.position.distance(rest) < 1e-4);
    }

    #[test]
    fn movement_speed_drives_the_headbob() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let mut rig = CameraRig::new(Options::default());
        let mut out = CameraTransform::default();
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        let rest = out.position;

        rig.set_movement_speed(1.0);
        assert_eq!(rig.headbob_mut().map(|h| h.speed()), Some(1.0));
        let mut furthest = 0.0_f32;
        for _ in 0..60 {
            let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
            furthest = furthest.max(out.position.distance(rest));
        }
        assert!(furthest > 1e-3);

        let mut options = Options::default();
        options.headbob.enabled = false;
        rig.set_options(options);
        let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
        assert!(out.position.distance(rest) < 1e-4);
        assert_eq!(rig.headbob_mut().map(|h| h.intensity()), Some(0.0));
    }

    #[test]
    fn effect_controls_without_effects_are_ignored() {
        let mut rig = RigBuilder::new(Options::default()).build();
        assert!(rig.offset_source_names().is_empty());
        rig.set_movement_speed(1.0);
        rig.add_trauma(1.0);
        rig.shake(ShakeImpulse::new(Vec3::ONE, 0.5));
        assert!(rig.headbob_mut().is_none());
        assert!(rig.shake_mut().is_none());
    }

    #[test]
    fn malformed_options_do_not_panic() {
        let focus = focus_at(Vec3::ZERO);
        let registry = registry_with(&focus);
        let mut options = Options::default();
        options.rig.min_zoom_distance = 60.0;
        options.rig.max_zoom_distance = 10.0;
        options.rig.desired_distance = f32::NAN;
        options.rotation.vertical_min = 80.0;
        options.rotation.vertical_max = -80.0;
        options.collision.margin = -1.0;
        options.zoom.smoothing_rate = f32::NAN;
        let (mut rig, queue, _calls) = scripted_rig(options);
        let mut out = CameraTransform::default();

        for i in 0..50_u8 {
            queue.borrow_mut().push_back(InputFrame {
                vertical: Some(30.0),
                zoom_in: (i % 2 == 0).then_some(-3.0),
                zoom_out: Some(f32::INFINITY),
                ..InputFrame::EMPTY
            });
            let _ = tick(&mut rig, &registry, &NoObstruction, &mut out);
            let d = rig.previous_distance();
            assert!((0.0..=10.0).contains(&d), "{d}");
            assert!(out.position.is_finite());
        }
    }

    #[test]
    fn set_options_reseeds_desired_distance() {
        let mut rig = CameraRig::new(Options::default());
        assert_eq!(rig.offset_source_names(), ["headbob", "screen_shake"]);

        let mut options = Options::default();
        options.rig.desired_distance = 8.0;
        options.zoom.smoothing_rate = 2.0;
        rig.set_options(options);
        assert_eq!(rig.desired_distance(), 8.0);
        assert_eq!(rig.options().zoom.smoothing_rate, 2.0);
    }
}
