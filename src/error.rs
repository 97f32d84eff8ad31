//! Error types for the sandbox core
//!
//! Every function in this crate is a pure computation over explicit inputs, so the
//! only failure class is a precondition violation: degenerate vectors, an impossible
//! frustum, a non-positive cube size. These are rejected before any matrix or mesh
//! is produced.

use std::fmt;

/// Result type for sandbox geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Cube side length was zero, negative or not finite
    InvalidMeshSize(f32),

    /// `eye` and `center` coincide, so there is no view direction
    DegenerateViewDirection,

    /// World up vector is zero-length or collinear with the view direction
    DegenerateUpVector,

    /// Frustum parameters cannot form a perspective projection
    InvalidFrustum(String),

    /// Viewport has a zero dimension
    InvalidViewport { width: u32, height: u32 },

    /// Camera rates or pitch limit out of range
    InvalidCameraConfig(String),

    /// Negative or non-finite frame delta time
    InvalidTimeStep(f32),

    /// A NaN or infinite value reached a geometry primitive
    NonFiniteInput(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidMeshSize(side) => {
                write!(f, "Invalid mesh size: side must be positive and finite, got {}", side)
            }
            GeometryError::DegenerateViewDirection => {
                write!(f, "Degenerate view direction: eye and center coincide")
            }
            GeometryError::DegenerateUpVector => {
                write!(f, "Degenerate up vector: zero-length or collinear with the view direction")
            }
            GeometryError::InvalidFrustum(msg) => write!(f, "Invalid frustum: {}", msg),
            GeometryError::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport: {}x{}", width, height)
            }
            GeometryError::InvalidCameraConfig(msg) => write!(f, "Invalid camera config: {}", msg),
            GeometryError::InvalidTimeStep(dt) => {
                write!(f, "Invalid time step: {} (must be finite and >= 0)", dt)
            }
            GeometryError::NonFiniteInput(what) => write!(f, "Non-finite input: {}", what),
        }
    }
}

impl std::error::Error for GeometryError {}
