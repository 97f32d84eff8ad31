//! View and projection matrix construction.
//!
//! Both functions are derived by hand rather than delegated to glam so the
//! preconditions can be checked before a matrix is built. Results are column-major
//! and follow the right-handed, OpenGL clip-space convention (camera looks down -Z,
//! depth maps to [-1, 1]).

use crate::error::{GeometryError, GeometryResult};
use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::PI;

/// Squared length below which a direction is treated as zero.
const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Squared sine of the smallest accepted angle between forward and world up.
const COLLINEAR_SIN_SQ: f32 = 1e-10;

/// Build a world-to-camera matrix for a camera at `eye` looking at `center`.
///
/// Preconditions: `center != eye`, and `world_up` is non-zero and not collinear
/// with the view direction.
pub fn look_at(eye: Vec3, center: Vec3, world_up: Vec3) -> GeometryResult<Mat4> {
    if !(eye.is_finite() && center.is_finite() && world_up.is_finite()) {
        return Err(GeometryError::NonFiniteInput("look_at vectors"));
    }

    let direction = center - eye;
    if direction.length_squared() <= DEGENERATE_LENGTH_SQ {
        return Err(GeometryError::DegenerateViewDirection);
    }
    if world_up.length_squared() <= DEGENERATE_LENGTH_SQ {
        return Err(GeometryError::DegenerateUpVector);
    }

    let forward = direction.normalize();
    let side = forward.cross(world_up.normalize());
    if side.length_squared() <= COLLINEAR_SIN_SQ {
        return Err(GeometryError::DegenerateUpVector);
    }

    let right = side.normalize();
    // Unit length already: right and forward are orthonormal.
    let up = right.cross(forward);

    Ok(Mat4::from_cols(
        Vec4::new(right.x, up.x, -forward.x, 0.0),
        Vec4::new(right.y, up.y, -forward.y, 0.0),
        Vec4::new(right.z, up.z, -forward.z, 0.0),
        Vec4::new(-right.dot(eye), -up.dot(eye), forward.dot(eye), 1.0),
    ))
}

/// Build a symmetric perspective projection.
///
/// `fov` is the vertical field of view in radians and must lie in `(0, pi)`;
/// `aspect` is width over height. Requires `0 < near < far`.
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> GeometryResult<Mat4> {
    if !(fov.is_finite() && aspect.is_finite() && near.is_finite() && far.is_finite()) {
        return Err(GeometryError::NonFiniteInput("perspective parameters"));
    }
    if fov <= 0.0 || fov >= PI {
        return Err(GeometryError::InvalidFrustum(format!(
            "fov must be in (0, pi) radians, got {}",
            fov
        )));
    }
    if aspect <= 0.0 {
        return Err(GeometryError::InvalidFrustum(format!(
            "aspect ratio must be positive, got {}",
            aspect
        )));
    }
    if near <= 0.0 {
        return Err(GeometryError::InvalidFrustum(format!(
            "near plane must be positive, got {}",
            near
        )));
    }
    if far <= near {
        return Err(GeometryError::InvalidFrustum(format!(
            "far plane ({}) must be greater than near plane ({})",
            far, near
        )));
    }

    let f = 1.0 / (fov / 2.0).tan();
    let depth = far - near;

    Ok(Mat4::from_cols(
        Vec4::new(f / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -(far + near) / depth, -1.0),
        Vec4::new(0.0, 0.0, -(2.0 * far * near) / depth, 0.0),
    ))
}
