//! Line-of-sight probes.
//!
//! A probe answers one question: walking from `origin` along `direction`,
//! how far until something is in the way? The rig uses it to keep the
//! camera in front of walls. Shapes in [`ObstacleSet`] are solid; a ray
//! that starts inside a shape does not report it, so the focus object's
//! own volume never blocks the view.

use glam::Vec3;

/// Casts a single ray against the scene.
pub trait ProbeCaster {
    /// Distance to the nearest obstruction within `max_distance`, or
    /// `None` when the path is clear. `direction` is unit length.
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<f32>;
}

impl<F> ProbeCaster for F
where
    F: Fn(Vec3, Vec3, f32) -> Option<f32>,
{
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<f32> {
        self(origin, direction, max_distance)
    }
}

/// A scene with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstruction;

impl ProbeCaster for NoObstruction {
    fn cast(&self, _: Vec3, _: Vec3, _: f32) -> Option<f32> {
        None
    }
}

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z,
/// distance) where the plane equation is: ax + by + cz + d = 0. Everything
/// on the negative side is solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing out of the solid half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let len = (a * a + b * b + c * c).sqrt();
        if len > 0.0 {
            Self {
                normal: Vec3::new(a / len, b / len, c / len),
                distance: d / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Plane through `point` whose free side faces `normal`.
    #[must_use]
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize_or_zero();
        Self {
            normal: n,
            distance: -n.dot(point),
        }
    }

    /// Signed distance from point to plane (positive = free side,
    /// negative = inside the solid)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    fn ray_hit(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let start = self.distance_to_point(origin);
        let approach = self.normal.dot(direction);
        if start < 0.0 || approach >= 0.0 {
            return None;
        }
        Some(-start / approach)
    }
}

/// Solid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

impl Sphere {
    fn ray_hit(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let to_origin = origin - self.center;
        let c = to_origin.length_squared() - self.radius * self.radius;
        if c <= 0.0 {
            return None;
        }
        let b = to_origin.dot(direction);
        let disc = b * b - c;
        if b > 0.0 || disc < 0.0 {
            return None;
        }
        Some(-b - disc.sqrt())
    }
}

/// One solid shape in an [`ObstacleSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Obstacle {
    /// Infinite wall.
    Plane(Plane),
    /// Round blocker.
    Sphere(Sphere),
}

impl Obstacle {
    fn ray_hit(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        match self {
            Self::Plane(plane) => plane.ray_hit(origin, direction),
            Self::Sphere(sphere) => sphere.ray_hit(origin, direction),
        }
    }
}

/// Analytic obstacle scene for tests, tools and headless runs.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape.
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, obstacle: Obstacle) -> Self {
        self.push(obstacle);
        self
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Shapes in insertion order.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

impl ProbeCaster for ObstacleSet {
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<f32> {
        self.obstacles
            .iter()
            .filter_map(|o| o.ray_hit(origin, direction))
            .filter(|&t| t <= max_distance)
            .min_by(f32::total_cmp)
    }
}
