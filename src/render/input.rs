//! Per-frame input snapshot for the free-look camera.
//!
//! The window layer feeds raw events into [`InputState`]; once per frame the driver
//! calls [`InputState::take_frame`] and hands the resulting [`FrameInput`] to the
//! camera.

use winit::keyboard::KeyCode;

/// Movement bindings understood by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl MoveKey {
    pub const ALL: [MoveKey; 6] = [
        MoveKey::Forward,
        MoveKey::Back,
        MoveKey::Left,
        MoveKey::Right,
        MoveKey::Up,
        MoveKey::Down,
    ];

    fn index(self) -> usize {
        match self {
            MoveKey::Forward => 0,
            MoveKey::Back => 1,
            MoveKey::Left => 2,
            MoveKey::Right => 3,
            MoveKey::Up => 4,
            MoveKey::Down => 5,
        }
    }

    /// WASD to move, Space to ascend, left Ctrl to descend.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(MoveKey::Forward),
            KeyCode::KeyS => Some(MoveKey::Back),
            KeyCode::KeyA => Some(MoveKey::Left),
            KeyCode::KeyD => Some(MoveKey::Right),
            KeyCode::Space => Some(MoveKey::Up),
            KeyCode::ControlLeft => Some(MoveKey::Down),
            _ => None,
        }
    }
}

/// Set of currently held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressedKeys([bool; 6]);

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: MoveKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn set(&mut self, key: MoveKey, pressed: bool) {
        self.0[key.index()] = pressed;
    }

    pub fn is_pressed(&self, key: MoveKey) -> bool {
        self.0[key.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&p| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = MoveKey> + '_ {
        MoveKey::ALL.into_iter().filter(|&key| self.is_pressed(key))
    }
}

impl FromIterator<MoveKey> for PressedKeys {
    fn from_iter<I: IntoIterator<Item = MoveKey>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), PressedKeys::with)
    }
}

/// Everything the camera consumes for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Relative mouse motion in pixels, positive to the right.
    pub mouse_dx: f32,
    /// Relative mouse motion in pixels, positive downward.
    pub mouse_dy: f32,
    pub keys: PressedKeys,
    /// Seconds since the previous frame.
    pub delta_time: f32,
}

impl FrameInput {
    pub fn new(mouse_dx: f32, mouse_dy: f32, keys: PressedKeys, delta_time: f32) -> Self {
        Self {
            mouse_dx,
            mouse_dy,
            keys,
            delta_time,
        }
    }

    pub fn idle(delta_time: f32) -> Self {
        Self {
            delta_time,
            ..Default::default()
        }
    }
}

/// Accumulates window events between frames.
#[derive(Debug, Default)]
pub struct InputState {
    mouse_dx: f32,
    mouse_dy: f32,
    keys: PressedKeys,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative motion events arrive several times per frame; they add up.
    pub fn on_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy += dy;
    }

    pub fn on_key(&mut self, key: MoveKey, pressed: bool) {
        self.keys.set(key, pressed);
    }

    /// Returns `false` for keys with no movement binding.
    pub fn on_key_code(&mut self, code: KeyCode, pressed: bool) -> bool {
        match MoveKey::from_key_code(code) {
            Some(key) => {
                self.on_key(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Drop all held keys, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys = PressedKeys::new();
    }

    pub fn keys(&self) -> PressedKeys {
        self.keys
    }

    /// Snapshot this frame's input. Mouse motion resets, held keys persist.
    pub fn take_frame(&mut self, delta_time: f32) -> FrameInput {
        let frame = FrameInput::new(self.mouse_dx, self.mouse_dy, self.keys, delta_time);
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        frame
    }
}
