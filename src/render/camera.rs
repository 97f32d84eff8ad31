use super::input::{FrameInput, MoveKey, PressedKeys};
use crate::error::{GeometryError, GeometryResult};
use crate::math::{look_at, perspective};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

pub const WORLD_UP: Vec3 = Vec3::Y;

/// Pitch limit, kept short of the vertical so the basis never flips.
pub const MAX_PITCH_DEGREES: f32 = 89.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Radians of rotation per pixel of mouse motion.
    pub sensitivity: f32,
    /// Units per second along each held movement axis.
    pub velocity: f32,
    /// Radians.
    pub max_pitch: f32,
}

impl CameraConfig {
    /// Pitch must stay strictly below the vertical or the basis degenerates.
    pub fn validate(&self) -> GeometryResult<()> {
        if !self.sensitivity.is_finite() || self.sensitivity < 0.0 {
            return Err(GeometryError::InvalidCameraConfig(format!(
                "sensitivity must be finite and >= 0, got {}",
                self.sensitivity
            )));
        }
        if !self.velocity.is_finite() || self.velocity < 0.0 {
            return Err(GeometryError::InvalidCameraConfig(format!(
                "velocity must be finite and >= 0, got {}",
                self.velocity
            )));
        }
        if !(self.max_pitch > 0.0 && self.max_pitch < FRAC_PI_2) {
            return Err(GeometryError::InvalidCameraConfig(format!(
                "max pitch must be in (0, pi/2) radians, got {}",
                self.max_pitch
            )));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.01,
            velocity: 10.0,
            max_pitch: MAX_PITCH_DEGREES.to_radians(),
        }
    }
}

/// Orthonormal camera frame derived from yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// `yaw` and `pitch` in radians. Yaw 0, pitch 0 looks down -Z.
    pub fn from_angles(yaw: f32, pitch: f32) -> Self {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();

        let direction = Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch);
        let forward = direction.normalize();
        let right = forward.cross(WORLD_UP).normalize();
        let up = right.cross(forward);

        Self { forward, right, up }
    }

    pub fn axis(&self, key: MoveKey) -> Vec3 {
        match key {
            MoveKey::Forward => self.forward,
            MoveKey::Back => -self.forward,
            MoveKey::Right => self.right,
            MoveKey::Left => -self.right,
            MoveKey::Up => self.up,
            MoveKey::Down => -self.up,
        }
    }
}

/// First-person camera driven by relative mouse motion and movement keys.
///
/// Angles are stored in radians. Yaw is unbounded; pitch is clamped to
/// `config.max_pitch` in both directions.
#[derive(Debug, Clone)]
pub struct FreeLookCamera {
    eye: Vec3,
    yaw: f32,
    pitch: f32,
    config: CameraConfig,
}

impl Default for FreeLookCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            config: CameraConfig::default(),
        }
    }
}

impl FreeLookCamera {
    pub fn new(eye: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            eye,
            yaw,
            ..Default::default()
        };
        camera.pitch = camera.clamp_pitch(pitch);
        camera
    }

    pub fn with_config(mut self, config: CameraConfig) -> GeometryResult<Self> {
        config.validate()?;
        self.config = config;
        self.pitch = self.clamp_pitch(self.pitch);
        Ok(self)
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_position(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    pub fn basis(&self) -> Basis {
        Basis::from_angles(self.yaw, self.pitch)
    }

    fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(-self.config.max_pitch, self.config.max_pitch)
    }

    /// Mouse right turns right, mouse up (negative `dy`) looks up.
    fn turned(&self, dx: f32, dy: f32) -> (f32, f32) {
        let yaw = self.yaw + dx * self.config.sensitivity;
        let pitch = self.clamp_pitch(self.pitch - dy * self.config.sensitivity);
        (yaw, pitch)
    }

    /// Held keys add up; two perpendicular keys move `sqrt(2)` times faster than one.
    fn moved(&self, basis: &Basis, keys: PressedKeys, delta_time: f32) -> Vec3 {
        let speed = self.config.velocity * delta_time;
        keys.iter().fold(self.eye, |eye, key| eye + basis.axis(key) * speed)
    }

    pub fn view_matrix(&self) -> GeometryResult<Mat4> {
        let forward = self.basis().forward;
        look_at(self.eye, self.eye + forward, WORLD_UP)
    }

    /// Integrate one frame of input and return the new view matrix.
    ///
    /// The next pose is computed aside and only committed once the view matrix
    /// has been built, so an error leaves the camera exactly as it was.
    pub fn update(&mut self, input: &FrameInput) -> GeometryResult<Mat4> {
        if !(input.mouse_dx.is_finite() && input.mouse_dy.is_finite()) {
            return Err(GeometryError::NonFiniteInput("mouse delta"));
        }
        if !input.delta_time.is_finite() || input.delta_time < 0.0 {
            return Err(GeometryError::InvalidTimeStep(input.delta_time));
        }

        let (yaw, pitch) = self.turned(input.mouse_dx, input.mouse_dy);
        if !yaw.is_finite() {
            return Err(GeometryError::NonFiniteInput("camera yaw"));
        }

        let basis = Basis::from_angles(yaw, pitch);
        let eye = self.moved(&basis, input.keys, input.delta_time);
        if !eye.is_finite() {
            return Err(GeometryError::NonFiniteInput("camera position"));
        }

        let view = look_at(eye, eye + basis.forward, WORLD_UP)?;

        self.yaw = yaw;
        self.pitch = pitch;
        self.eye = eye;

        log::trace!(
            "camera eye={:?} yaw={:.3} pitch={:.3}",
            self.eye,
            self.yaw,
            self.pitch
        );

        Ok(view)
    }
}

/// Perspective frustum parameters. `fov` is vertical, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 60.0_f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Follow a window resize. A zero-sized viewport keeps the previous aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> GeometryResult<()> {
        if width == 0 || height == 0 {
            return Err(GeometryError::InvalidViewport { width, height });
        }
        self.aspect = width as f32 / height as f32;
        log::debug!("Viewport {}x{} (aspect {:.4})", width, height, self.aspect);
        Ok(())
    }

    pub fn matrix(&self) -> GeometryResult<Mat4> {
        perspective(self.fov, self.aspect, self.near, self.far)
    }
}
