//! Math utilities module
//!
//! Hand-derived view/projection construction plus the model transform, with
//! re-exports of the glam types used across the crate.

mod projection;
mod transform;

pub use projection::{look_at, perspective};
pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{Mat4, Quat, Vec3, Vec4};
