use glam::{Mat4, Quat, Vec3};

/// Where the cube sits in the world: scaled, then rotated, then translated.
///
/// Feeds the `model` uniform; the camera never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Mesh left at the world origin, unrotated, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Same placement, rotated about the local X axis by `angle` radians.
    /// Negative angles tip the top face away from a camera looking down -Z,
    /// bringing the bottom face into view.
    pub fn with_pitch(self, angle: f32) -> Self {
        Self {
            rotation: self.rotation * Quat::from_rotation_x(angle),
            ..self
        }
    }

    /// Column-major `T * R * S`, ready for upload.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use std::f32::consts::FRAC_PI_6;

    #[test]
    fn identity_matrix() {
        assert_eq!(Transform::default().to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translate_times_rotate() {
        // Pushed 10 units away and tipped so the bottom face shows.
        let placement = Transform::from_position(Vec3::new(0.0, 0.0, -10.0)).with_pitch(-FRAC_PI_6);
        let (s, c) = FRAC_PI_6.sin_cos();

        let expected = Mat4::from_cols(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, c, -s, 0.0),
            Vec4::new(0.0, s, c, 0.0),
            Vec4::new(0.0, 0.0, -10.0, 1.0),
        );

        assert!(placement.to_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn transform_point_agrees_with_matrix() {
        let t = Transform::new(
            Vec3::new(1.0, -2.0, 3.0),
            Quat::from_rotation_y(0.7),
            Vec3::new(2.0, 1.0, 0.5),
        );
        let p = Vec3::new(0.25, 4.0, -1.0);

        assert!(t
            .transform_point(p)
            .abs_diff_eq(t.to_matrix().transform_point3(p), 1e-5));
    }
}
