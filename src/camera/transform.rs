use glam::{Mat4, Quat, Vec3};

/// Camera pose produced by the rig each tick.
///
/// This is the rig's private copy of the camera; it is only pushed to the
/// real output (a [`TransformSink`]) once per tick, after the whole
/// pipeline has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Orientation; the camera looks down its local `-Z`.
    pub rotation: Quat,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraTransform {
    /// Create a transform from a position and rotation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Viewing direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Right direction in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Build the world → view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.forward(),
            self.up(),
        )
    }

    /// Combined view-projection matrix for a perspective lens.
    /// `fovy` is in degrees.
    #[must_use]
    pub fn view_projection(
        &self,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Mat4 {
        // perspective_rh maps depth into [0, 1]
        let proj = Mat4::perspective_rh(fovy.to_radians(), aspect, znear, zfar);
        proj * self.view_matrix()
    }
}

/// Receives the finished transform once per tick.
pub trait TransformSink {
    /// Take over `transform` as the real camera pose.
    fn apply(&mut self, transform: &CameraTransform);
}

impl TransformSink for CameraTransform {
    fn apply(&mut self, transform: &CameraTransform) {
        *self = *transform;
    }
}

impl<F> TransformSink for F
where
    F: FnMut(&CameraTransform),
{
    fn apply(&mut self, transform: &CameraTransform) {
        self(transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_looks_down_negative_z() {
        let t = CameraTransform::default();
        assert_eq!(t.forward(), Vec3::NEG_Z);
        assert_eq!(t.up(), Vec3::Y);
        assert_eq!(t.right(), Vec3::X);
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let t = CameraTransform::new(Vec3::new(0.0, 0.0, 10.0), Quat::IDENTITY);
        let eye_in_view = t.view_matrix().transform_point3(t.position);
        assert!(eye_in_view.length() < 1e-5);
        let ahead = t.view_matrix().transform_point3(Vec3::ZERO);
        assert!((ahead - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn closures_and_transforms_are_sinks() {
        let produced = CameraTransform::new(Vec3::ONE, Quat::IDENTITY);

        let mut output = CameraTransform::default();
        output.apply(&produced);
        assert_eq!(output, produced);

        let mut seen = Vec::new();
        let mut sink = |t: &CameraTransform| seen.push(t.position);
        sink.apply(&produced);
        assert_eq!(seen, vec![Vec3::ONE]);
    }
}
