use crate::state::YawPitch;
use clap::ValueEnum;
use std::time::Duration;

/// Motion constants selected by the reduced-motion preference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// Fraction of the remaining distance to the target covered each frame
    pub damping: f64,
    /// Per-frame multiplicative velocity decay, per axis
    pub inertia: YawPitch,
    /// Yaw increment added to the target each idle frame
    pub auto_speed: f64,
}

impl MotionProfile {
    /// Softer variant: half the damping step, faster decay, no auto-rotation
    pub fn reduced_from(standard: &MotionProfile) -> Self {
        MotionProfile {
            damping: standard.damping * 0.5,
            inertia: YawPitch::splat(0.8),
            auto_speed: 0.0,
        }
    }
}

/// Inclusive angle range for a clamped axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn symmetric(limit: f64) -> Self {
        let limit = limit.abs();
        AxisBounds {
            min: -limit,
            max: limit,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// What happens to residual velocity when a drag ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReleaseBehavior {
    /// Keep the last drag velocity and let inertia decay it
    #[default]
    Coast,
    /// Drop the velocity to zero on release
    Stop,
}

/// What happens to outstanding velocity when reduced motion turns on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReducedMotionVelocity {
    Zero,
    #[default]
    Halve,
}

impl ReducedMotionVelocity {
    pub fn factor(self) -> f64 {
        match self {
            ReducedMotionVelocity::Zero => 0.0,
            ReducedMotionVelocity::Halve => 0.5,
        }
    }
}

/// Tuning for one rotation controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Angle units per pixel of drag, per axis
    pub sensitivity: YawPitch,
    pub standard: MotionProfile,
    pub reduced: MotionProfile,
    /// `None` keeps the controller yaw-only
    pub pitch_bounds: Option<AxisBounds>,
    pub yaw_bounds: Option<AxisBounds>,
    /// Delay between release and auto-rotation resuming
    pub cooldown: Duration,
    pub auto_rotate: bool,
    pub release: ReleaseBehavior,
    pub reduced_velocity: ReducedMotionVelocity,
}

impl ControllerConfig {
    pub fn profile(&self, reduced_motion: bool) -> &MotionProfile {
        if reduced_motion {
            &self.reduced
        } else {
            &self.standard
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let standard = MotionProfile {
            damping: 0.12,
            inertia: YawPitch::new(0.94, 0.9),
            auto_speed: 0.002,
        };
        ControllerConfig {
            sensitivity: YawPitch::new(0.004, 0.003),
            reduced: MotionProfile::reduced_from(&standard),
            standard,
            pitch_bounds: Some(AxisBounds::symmetric(0.5)),
            yaw_bounds: None,
            cooldown: Duration::from_millis(2000),
            auto_rotate: true,
            release: ReleaseBehavior::Coast,
            reduced_velocity: ReducedMotionVelocity::Halve,
        }
    }
}
