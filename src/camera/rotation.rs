//! Look-angle state: wrapped yaw, clamped pitch, and threshold events.
//!
//! Angles are in degrees. Yaw (horizontal) increases clockwise seen from
//! above and 0 looks down `-Z`; pitch (vertical) is positive when the
//! camera looks down on its focus.

use glam::{Quat, Vec3};

use crate::options::{Options, RotationOptions};

/// Capability the rig needs from a rotation component.
pub trait Rotation {
    /// Set both angles outright. Used when a focus is acquired.
    fn rotate(&mut self, horizontal: f32, vertical: f32);

    /// Turn by `degrees`, wrapping into `[0, 360)`.
    fn rotate_horizontally(&mut self, degrees: f32);

    /// Tilt by `degrees`, clamped into the configured pitch range.
    fn rotate_vertically(&mut self, degrees: f32);

    /// Notify listeners about thresholds crossed since the previous check.
    fn check_rotation_degrees_events(&mut self);

    /// Current yaw in degrees, in `[0, 360)`.
    fn horizontal_degrees(&self) -> f32;

    /// Current pitch in degrees.
    fn vertical_degrees(&self) -> f32;

    /// Orientation derived from the two angles.
    fn orientation(&self) -> Quat {
        orientation_from_degrees(
            self.horizontal_degrees(),
            self.vertical_degrees(),
        )
    }

    /// Pick up new options between ticks.
    fn apply_options(&mut self, _options: &Options) {}
}

/// Quaternion for a (yaw, pitch) pair in degrees.
#[must_use]
pub fn orientation_from_degrees(horizontal: f32, vertical: f32) -> Quat {
    Quat::from_rotation_y(-horizontal.to_radians())
        * Quat::from_rotation_x(-vertical.to_radians())
}

/// Viewing direction for a (yaw, pitch) pair in degrees, by direct
/// spherical-to-Cartesian conversion.
#[must_use]
pub fn spherical_forward(horizontal: f32, vertical: f32) -> Vec3 {
    let (sin_h, cos_h) = horizontal.to_radians().sin_cos();
    let (sin_v, cos_v) = vertical.to_radians().sin_cos();
    Vec3::new(sin_h * cos_v, -sin_v, -cos_h * cos_v)
}

/// Wrap an angle into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Which angle crossed a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// Yaw.
    Horizontal,
    /// Pitch.
    Vertical,
}

/// Direction of a threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The angle grew past the threshold.
    Increasing,
    /// The angle shrank past the threshold.
    Decreasing,
}

/// Fired when an angle passes a configured threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationEvent {
    /// Angle that moved.
    pub axis: RotationAxis,
    /// Threshold that was passed, in degrees.
    pub threshold: f32,
    /// Which way it was passed.
    pub crossing: Crossing,
    /// Angle value after the move.
    pub degrees: f32,
}

type Listener = Box<dyn FnMut(&RotationEvent)>;

/// Default [`Rotation`] implementation.
pub struct RotationController {
    horizontal: f32,
    vertical: f32,
    vertical_min: f32,
    vertical_max: f32,
    vertical_thresholds: Vec<f32>,
    horizontal_thresholds: Vec<f32>,
    /// Angles seen by the previous event check.
    last_checked: Option<(f32, f32)>,
    listeners: Vec<Listener>,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(&RotationOptions::default())
    }
}

impl RotationController {
    /// Create a controller at yaw 0, pitch 0 (clamped into range).
    #[must_use]
    pub fn new(options: &RotationOptions) -> Self {
        let mut controller = Self {
            horizontal: 0.0,
            vertical: 0.0,
            vertical_min: options.vertical_min,
            vertical_max: options.vertical_max,
            vertical_thresholds: options.vertical_thresholds.clone(),
            horizontal_thresholds: options
                .horizontal_thresholds
                .iter()
                .map(|&t| wrap_degrees(t))
                .collect(),
            last_checked: None,
            listeners: Vec::new(),
        };
        controller.vertical = controller.clamp_pitch(0.0);
        controller
    }

    /// Register a callback for threshold crossings.
    pub fn subscribe(&mut self, listener: impl FnMut(&RotationEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn clamp_pitch(&self, degrees: f32) -> f32 {
        // Never panics, even when min > max
        degrees.min(self.vertical_max).max(self.vertical_min)
    }

    fn vertical_crossings(&self, from: f32, to: f32) -> Vec<RotationEvent> {
        self.vertical_thresholds
            .iter()
            .filter_map(|&t| {
                let crossing = if from < t && t <= to {
                    Crossing::Increasing
                } else if to < t && t <= from {
                    Crossing::Decreasing
                } else {
                    return None;
                };
                Some(RotationEvent {
                    axis: RotationAxis::Vertical,
                    threshold: t,
                    crossing,
                    degrees: to,
                })
            })
            .collect()
    }

    fn horizontal_crossings(&self, from: f32, to: f32) -> Vec<RotationEvent> {
        // Walk the shortest arc so 350 → 10 passes through 0, not 180
        let arc = (to - from + 540.0).rem_euclid(360.0) - 180.0;
        let end = from + arc;
        self.horizontal_thresholds
            .iter()
            .filter_map(|&t| {
                let crossing = [t - 360.0, t, t + 360.0].iter().find_map(|&k| {
                    if arc > 0.0 && from < k && k <= end {
                        Some(Crossing::Increasing)
                    } else if arc < 0.0 && end < k && k <= from {
                        Some(Crossing::Decreasing)
                    } else {
                        None
                    }
                })?;
                Some(RotationEvent {
                    axis: RotationAxis::Horizontal,
                    threshold: t,
                    crossing,
                    degrees: to,
                })
            })
            .collect()
    }
}

impl Rotation for RotationController {
    fn rotate(&mut self, horizontal: f32, vertical: f32) {
        if horizontal.is_finite() {
            self.horizontal = wrap_degrees(horizontal);
        }
        if vertical.is_finite() {
            self.vertical = self.clamp_pitch(vertical);
        }
        // A jump is not a sweep; the next check starts from here
        self.last_checked = None;
    }

    fn rotate_horizontally(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            log::warn!("ignoring non-finite yaw delta {degrees}");
            return;
        }
        self.horizontal = wrap_degrees(self.horizontal + degrees);
    }

    fn rotate_vertically(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            log::warn!("ignoring non-finite pitch delta {degrees}");
            return;
        }
        self.vertical = self.clamp_pitch(self.vertical + degrees);
    }

    fn check_rotation_degrees_events(&mut self) {
        let now = (self.horizontal, self.vertical);
        let Some((prev_h, prev_v)) = self.last_checked.replace(now) else {
            return;
        };
        if self.listeners.is_empty() {
            return;
        }

        let mut events = self.horizontal_crossings(prev_h, now.0);
        events.extend(self.vertical_crossings(prev_v, now.1));
        for event in &events {
            log::debug!(
                "{:?} crossed {}° ({:?})",
                event.axis,
                event.threshold,
                event.crossing
            );
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }

    fn horizontal_degrees(&self) -> f32 {
        self.horizontal
    }

    fn vertical_degrees(&self) -> f32 {
        self.vertical
    }

    fn apply_options(&mut self, options: &Options) {
        let rotation = &options.rotation;
        self.vertical_min = rotation.vertical_min;
        self.vertical_max = rotation.vertical_max;
        self.vertical_thresholds.clone_from(&rotation.vertical_thresholds);
        self.horizontal_thresholds = rotation
            .horizontal_thresholds
            .iter()
            .map(|&t| wrap_degrees(t))
            .collect();
        self.vertical = self.clamp_pitch(self.vertical);
    }
}
