//! Headless demo of the camera rig.
//!
//! Walks a focus object around a pillar next to a wall, feeds scripted
//! mouse and key input, fires a shake, drops the focus and brings it back,
//! logging the camera as it goes. Run with `RUST_LOG=info` (or `debug`).
//!
//! Usage: `vantage [options.toml] [--realtime]`

use std::cell::Cell;
use std::f32::consts::TAU;
use std::path::Path;
use std::rc::Rc;

use glam::{Quat, Vec3};
use vantage::effects::ShakeImpulse;
use vantage::input::{InputEvent, MouseButton};
use vantage::util::frame_timing::FrameTiming;
use vantage::world::{
    FocusPose, Obstacle, ObstacleSet, Plane, SharedFocus, Sphere, TagRegistry,
    World,
};
use vantage::{CameraRig, CameraTransform, Options, TickOutcome};

/// Simulation rate
const TICK_RATE: u32 = 60;
const DEMO_SECONDS: u32 = 12;
/// Radius of the focus object's walk around the pillar
const ORBIT_RADIUS: f32 = 6.0;
/// Seconds per lap
const ORBIT_PERIOD: f32 = 8.0;

fn load_options(path: Option<&str>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(Path::new(path)) {
        Ok(options) => {
            log::info!("Loaded options from {path}");
            options
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn build_scene() -> ObstacleSet {
    ObstacleSet::new()
        .with(Obstacle::Plane(Plane::from_point_normal(Vec3::ZERO, Vec3::Y)))
        .with(Obstacle::Plane(Plane::from_point_normal(
            Vec3::new(0.0, 0.0, 11.0),
            Vec3::NEG_Z,
        )))
        .with(Obstacle::Sphere(Sphere {
            center: Vec3::new(0.0, 1.0, 0.0),
            radius: 2.0,
        }))
}

/// Pose of the walking focus object `seconds` into the demo.
fn walk_pose(seconds: f32) -> FocusPose {
    let angle = TAU * seconds / ORBIT_PERIOD;
    let position =
        Vec3::new(angle.cos() * ORBIT_RADIUS, 0.9, angle.sin() * ORBIT_RADIUS);
    let heading = Vec3::new(-angle.sin(), 0.0, angle.cos());
    let yaw = heading.x.atan2(-heading.z);
    FocusPose::new(position, Quat::from_rotation_y(-yaw))
}

/// Input, effects and focus changes scheduled at tick `n`.
fn script(
    n: u32,
    rig: &mut CameraRig,
    focus: &mut Option<SharedFocus>,
    registry: &mut TagRegistry,
) {
    let tag = rig.options().rig.camera_focus_tag.clone();
    match n {
        n if n == 2 * TICK_RATE => rig.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        }),
        n if n == 4 * TICK_RATE => rig.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        }),
        n if n == 5 * TICK_RATE => rig.handle_key_press("Equal"),
        n if n == 6 * TICK_RATE => {
            rig.shake(ShakeImpulse::new(Vec3::new(0.3, 0.2, 0.3), 0.6));
        }
        n if n == 7 * TICK_RATE => rig.handle_event(InputEvent::Scroll { delta: -3.0 }),
        n if n == 8 * TICK_RATE => rig.add_trauma(0.7),
        n if n == 10 * TICK_RATE => {
            log::info!("Despawning focus object");
            *focus = None;
        }
        n if n == 11 * TICK_RATE => {
            log::info!("Respawning focus object");
            let spawned: SharedFocus = Rc::new(Cell::new(walk_pose(0.0)));
            registry.register(&tag, &spawned);
            *focus = Some(spawned);
        }
        _ => {}
    }
    if (2 * TICK_RATE..4 * TICK_RATE).contains(&n) {
        rig.handle_event(InputEvent::Motion { dx: 1.5, dy: -0.4 });
    }
}

fn main() {
    env_logger::init();

    let mut path = None;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            path = Some(arg);
        }
    }
    let options = load_options(path.as_deref());
    let tag = options.rig.camera_focus_tag.clone();
    let mut rig = CameraRig::new(options);
    rig.set_movement_speed(1.0);

    let scene = build_scene();
    let mut registry = TagRegistry::new();
    let mut focus: Option<SharedFocus> = None;

    let mut timing = FrameTiming::new(TICK_RATE);
    let dt = timing.fixed_dt();
    let mut camera = CameraTransform::default();

    for n in 0..TICK_RATE * DEMO_SECONDS {
        let seconds = n as f32 * dt;
        if n == TICK_RATE / 2 {
            log::info!("Spawning focus object '{tag}'");
            let spawned: SharedFocus = Rc::new(Cell::new(walk_pose(seconds)));
            registry.register(&tag, &spawned);
            focus = Some(spawned);
        }
        if let Some(f) = &focus {
            f.set(walk_pose(seconds));
        }
        script(n, &mut rig, &mut focus, &mut registry);
        registry.prune();

        let outcome = rig.tick(dt, &World::new(&registry, &scene), &mut camera);
        match outcome {
            TickOutcome::Acquired | TickOutcome::TargetLost => {
                log::info!("t={seconds:5.2}s {outcome:?}");
            }
            TickOutcome::Updated if n % (TICK_RATE / 2) == 0 => {
                log::info!(
                    "t={seconds:5.2}s eye={:.2} yaw={:6.1} pitch={:5.1} distance={:5.2}/{:5.2}",
                    camera.position,
                    rig.rotation().horizontal_degrees(),
                    rig.rotation().vertical_degrees(),
                    rig.previous_distance(),
                    rig.desired_distance(),
                );
            }
            _ => {}
        }

        if realtime {
            std::thread::sleep(timing.until_next_tick());
        }
        let _ = timing.end_tick();
    }

    log::info!("Finished; measured {:.0} ticks/s", timing.rate());
}
