//! Rendering-side core
//!
//! Free-look camera, per-frame input snapshot and procedural cube generation. GPU
//! upload and draw submission belong to the backend that consumes these.

pub mod camera;
pub mod input;
pub mod mesh;

pub use camera::{Basis, CameraConfig, FreeLookCamera, Projection, MAX_PITCH_DEGREES, WORLD_UP};
pub use input::{FrameInput, InputState, MoveKey, PressedKeys};
pub use mesh::{generate_cube, MeshData, Vertex};
