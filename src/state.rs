use std::ops::{Add, AddAssign, Mul, Sub};
use std::time::Instant;

/// A value per rotation axis: angles, velocities, or per-axis tuning constants
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YawPitch {
    /// Rotation about the vertical axis
    pub yaw: f64,
    /// Rotation about the horizontal axis
    pub pitch: f64,
}

impl YawPitch {
    pub const ZERO: YawPitch = YawPitch {
        yaw: 0.0,
        pitch: 0.0,
    };

    pub const fn new(yaw: f64, pitch: f64) -> Self {
        YawPitch { yaw, pitch }
    }

    /// Same value on both axes
    pub const fn splat(value: f64) -> Self {
        YawPitch {
            yaw: value,
            pitch: value,
        }
    }

    /// Component-wise product
    pub fn scale(self, factors: YawPitch) -> Self {
        YawPitch {
            yaw: self.yaw * factors.yaw,
            pitch: self.pitch * factors.pitch,
        }
    }
}

impl Add for YawPitch {
    type Output = YawPitch;

    fn add(self, rhs: YawPitch) -> YawPitch {
        YawPitch::new(self.yaw + rhs.yaw, self.pitch + rhs.pitch)
    }
}

impl AddAssign for YawPitch {
    fn add_assign(&mut self, rhs: YawPitch) {
        self.yaw += rhs.yaw;
        self.pitch += rhs.pitch;
    }
}

impl Sub for YawPitch {
    type Output = YawPitch;

    fn sub(self, rhs: YawPitch) -> YawPitch {
        YawPitch::new(self.yaw - rhs.yaw, self.pitch - rhs.pitch)
    }
}

impl Mul<f64> for YawPitch {
    type Output = YawPitch;

    fn mul(self, rhs: f64) -> YawPitch {
        YawPitch::new(self.yaw * rhs, self.pitch * rhs)
    }
}

/// Pointer coordinate in pixel units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

impl From<f64> for Position {
    /// Single-axis drags only carry a horizontal coordinate
    fn from(x: f64) -> Self {
        Position { x, y: 0.0 }
    }
}

/// Identifies one pointer contact (a held mouse button in the terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub u8);

/// Pending Settling -> Idle transition.
///
/// Each scheduled cooldown gets a fresh generation; once the token is dropped
/// from the controller it can never fire again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownToken {
    pub generation: u64,
    pub deadline: Instant,
}

impl CooldownToken {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Interaction mode of the rotation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Resting or auto-rotating
    Idle,
    /// A contact is held and drives the rotation
    Dragging { contact: ContactId },
    /// Contact released; auto-rotation waits for the token's deadline
    Settling(CooldownToken),
}

/// Rotation state owned by the controller
#[derive(Debug, Clone)]
pub struct RotationState {
    /// Angles applied to the globe this frame
    pub current: YawPitch,
    /// Angles the controller is easing toward
    pub target: YawPitch,
    /// Signed angular velocity per frame
    pub velocity: YawPitch,
    pub mode: Mode,
    pub auto_rotate_enabled: bool,
    /// Last pointer position of the tracked contact
    pub pointer_anchor: Option<Position>,
    pub reduced_motion: bool,
}

impl RotationState {
    pub fn new(auto_rotate_enabled: bool, reduced_motion: bool) -> Self {
        RotationState {
            current: YawPitch::ZERO,
            target: YawPitch::ZERO,
            velocity: YawPitch::ZERO,
            mode: Mode::Idle,
            auto_rotate_enabled,
            pointer_anchor: None,
            reduced_motion,
        }
    }
}
