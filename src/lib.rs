//! # cube-sandbox
//!
//! Geometric core of an interactive 3D sandbox: a procedurally generated cube seen
//! through a free-look (yaw/pitch) camera with keyboard translation.
//!
//! ## Features
//! - Hand-derived `look_at` and perspective matrices with precondition checks
//! - Free-look camera integrating mouse motion and movement keys per frame
//! - Flat-colored cube mesh with per-face vertices and CCW winding
//! - Headless [`Scene`] that turns frame input into model/view/projection matrices
//!
//! Window creation, event polling and GPU submission are left to the backend.
//!
//! ## Example
//! ```rust
//! use cube_sandbox::render::{FrameInput, MoveKey, PressedKeys};
//! use cube_sandbox::Scene;
//!
//! let mut scene = Scene::new(4.0)?;
//! let keys = PressedKeys::new().with(MoveKey::Forward);
//! let matrices = scene.frame(&FrameInput::new(0.0, 0.0, keys, 1.0))?;
//!
//! assert!((scene.camera.eye().z + 10.0).abs() < 1e-5);
//! let _uniform = matrices.mvp();
//! # Ok::<(), cube_sandbox::GeometryError>(())
//! ```

pub mod error;
pub mod math;
pub mod render;
pub mod scene;

pub use error::{GeometryError, GeometryResult};
pub use math::{look_at, perspective, Transform};
pub use render::{
    generate_cube, Basis, CameraConfig, FrameInput, FreeLookCamera, InputState, MeshData,
    MoveKey, PressedKeys, Projection, Vertex,
};
pub use scene::{FrameMatrices, Scene};
