//! The sandbox scene: one cube, one free-look camera.
//!
//! [`Scene`] is what a frame driver holds. It generates the cube once, places it
//! with a model transform, and each frame turns a [`FrameInput`] into the three
//! matrices the backend uploads as uniforms.

use crate::error::GeometryResult;
use crate::math::Transform;
use crate::render::{generate_cube, FreeLookCamera, FrameInput, MeshData, Projection};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_6;

pub const DEFAULT_CUBE_SIDE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameMatrices {
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }
}

pub struct Scene {
    mesh: MeshData,
    pub model: Transform,
    pub camera: FreeLookCamera,
    pub projection: Projection,
}

impl Scene {
    /// Cube of the given side, 10 units in front of the camera, tipped by 30 degrees about X.
    pub fn new(cube_side: f32) -> GeometryResult<Self> {
        let mesh = generate_cube(cube_side)?;
        let model = Transform::from_position(Vec3::new(0.0, 0.0, -10.0)).with_pitch(-FRAC_PI_6);

        Ok(Self {
            mesh,
            model,
            camera: FreeLookCamera::default(),
            projection: Projection::default(),
        })
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn resize(&mut self, width: u32, height: u32) -> GeometryResult<()> {
        self.projection.set_viewport(width, height).inspect_err(|e| {
            log::warn!("Ignoring resize: {}", e);
        })
    }

    /// Advance the camera by one frame and collect the matrices to draw with.
    ///
    /// The projection is built first: a bad frustum fails the frame without moving
    /// the camera.
    pub fn frame(&mut self, input: &FrameInput) -> GeometryResult<FrameMatrices> {
        let projection = self.projection.matrix().inspect_err(|e| {
            log::warn!("Rejected projection: {}", e);
        })?;
        let view = self.camera.update(input).inspect_err(|e| {
            log::warn!("Rejected frame input: {}", e);
        })?;

        Ok(FrameMatrices {
            model: self.model.to_matrix(),
            view,
            projection,
        })
    }
}
