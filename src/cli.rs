use crate::config::{
    AxisBounds, ControllerConfig, MotionProfile, ReducedMotionVelocity, ReleaseBehavior,
};
use crate::input::CellSize;
use crate::state::YawPitch;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Interactive wireframe globe for the terminal
#[derive(Debug, Parser)]
#[command(name = "globe-hero", version, about)]
pub struct Cli {
    /// Start with reduced motion (no auto-rotation, softer easing); toggle live with `m`
    #[arg(long, env = "GLOBE_REDUCED_MOTION")]
    pub reduced_motion: bool,

    /// Never auto-rotate, even when motion is allowed
    #[arg(long)]
    pub no_auto_rotate: bool,

    /// Only spin about the vertical axis
    #[arg(long)]
    pub yaw_only: bool,

    /// Maximum tilt in radians either way
    #[arg(long, default_value_t = 0.5, value_parser = non_negative)]
    pub pitch_limit: f64,

    /// Clamp yaw to this many radians either way
    #[arg(long, value_parser = non_negative)]
    pub yaw_limit: Option<f64>,

    /// Radians per pixel of horizontal drag
    #[arg(long, default_value_t = 0.004)]
    pub yaw_sensitivity: f64,

    /// Radians per pixel of vertical drag
    #[arg(long, default_value_t = 0.003)]
    pub pitch_sensitivity: f64,

    /// Fraction of the remaining angle covered each frame
    #[arg(long, default_value_t = 0.12, value_parser = damping_fraction)]
    pub damping: f64,

    /// Per-frame yaw velocity decay
    #[arg(long, default_value_t = 0.94, value_parser = decay_fraction)]
    pub yaw_inertia: f64,

    /// Per-frame pitch velocity decay
    #[arg(long, default_value_t = 0.9, value_parser = decay_fraction)]
    pub pitch_inertia: f64,

    /// Idle yaw increment per frame
    #[arg(long, default_value_t = 0.002)]
    pub auto_speed: f64,

    /// Delay after a drag before auto-rotation resumes
    #[arg(long, default_value_t = 2000)]
    pub cooldown_ms: u64,

    /// Keep or drop the drag velocity on release
    #[arg(long, value_enum, default_value_t = ReleaseBehavior::Coast)]
    pub release: ReleaseBehavior,

    /// What reduced motion does to a spin in progress
    #[arg(long, value_enum, default_value_t = ReducedMotionVelocity::Halve)]
    pub reduced_velocity: ReducedMotionVelocity,

    /// Frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Number of meridian arcs
    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(u16).range(1..=360))]
    pub meridians: u16,

    /// Number of latitude bands
    #[arg(long, default_value_t = 11, value_parser = clap::value_parser!(u16).range(1..=180))]
    pub parallels: u16,

    /// Samples per wireframe line
    #[arg(long, default_value_t = 180, value_parser = clap::value_parser!(u16).range(3..=2048))]
    pub segments: u16,

    /// Terminal cell width in pixels, used to scale drags
    #[arg(long, default_value_t = 8.0)]
    pub cell_width: f64,

    /// Terminal cell height in pixels
    #[arg(long, default_value_t = 16.0)]
    pub cell_height: f64,

    /// Print one static frame and exit
    #[arg(long = "static")]
    pub force_static: bool,

    /// Write logs here (filter with RUST_LOG)
    #[arg(long, env = "GLOBE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn controller_config(&self) -> ControllerConfig {
        let standard = MotionProfile {
            damping: self.damping,
            inertia: YawPitch::new(self.yaw_inertia, self.pitch_inertia),
            auto_speed: self.auto_speed,
        };
        ControllerConfig {
            sensitivity: YawPitch::new(self.yaw_sensitivity, self.pitch_sensitivity),
            reduced: MotionProfile::reduced_from(&standard),
            standard,
            pitch_bounds: (!self.yaw_only).then(|| AxisBounds::symmetric(self.pitch_limit)),
            yaw_bounds: self.yaw_limit.map(AxisBounds::symmetric),
            cooldown: Duration::from_millis(self.cooldown_ms),
            auto_rotate: !self.no_auto_rotate,
            release: self.release,
            reduced_velocity: self.reduced_velocity,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize {
            width: self.cell_width.max(1.0),
            height: self.cell_height.max(1.0),
        }
    }
}

fn parse_f64(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .map_err(|e| format!("`{s}` is not a number: {e}"))
}

fn non_negative(s: &str) -> Result<f64, String> {
    let value = parse_f64(s)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("`{s}` must not be negative"))
    }
}

/// (0, 1]
fn damping_fraction(s: &str) -> Result<f64, String> {
    let value = parse_f64(s)?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(format!("`{s}` must be in (0, 1]"))
    }
}

/// [0, 1)
fn decay_fraction(s: &str) -> Result<f64, String> {
    let value = parse_f64(s)?;
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("`{s}` must be in [0, 1)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_build_the_standard_controller() {
        let cli = Cli::try_parse_from(["globe-hero"]).unwrap();
        let config = cli.controller_config();
        assert_eq!(config, ControllerConfig::default());
        assert_eq!(cli.frame_interval(), Duration::from_secs(1) / 60);
        assert!(!cli.force_static);
    }

    #[test]
    fn yaw_only_drops_pitch_bounds() {
        let cli = Cli::try_parse_from(["globe-hero", "--yaw-only", "--yaw-limit", "1.5"]).unwrap();
        let config = cli.controller_config();
        assert_eq!(config.pitch_bounds, None);
        assert_eq!(config.yaw_bounds, Some(AxisBounds { min: -1.5, max: 1.5 }));
    }

    #[test]
    fn tuning_flags_flow_into_config() {
        let cli = Cli::try_parse_from([
            "globe-hero",
            "--damping",
            "0.2",
            "--yaw-inertia",
            "0.5",
            "--release",
            "stop",
            "--reduced-velocity",
            "zero",
            "--no-auto-rotate",
            "--cooldown-ms",
            "500",
        ])
        .unwrap();
        let config = cli.controller_config();
        assert_eq!(config.standard.damping, 0.2);
        assert_eq!(config.reduced.damping, 0.1);
        assert_eq!(config.standard.inertia.yaw, 0.5);
        assert_eq!(config.release, ReleaseBehavior::Stop);
        assert_eq!(config.reduced_velocity, ReducedMotionVelocity::Zero);
        assert!(!config.auto_rotate);
        assert_eq!(config.cooldown, Duration::from_millis(500));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Cli::try_parse_from(["globe-hero", "--damping", "0"]).is_err());
        assert!(Cli::try_parse_from(["globe-hero", "--damping", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["globe-hero", "--yaw-inertia", "1"]).is_err());
        assert!(Cli::try_parse_from(["globe-hero", "--pitch-limit", "-0.1"]).is_err());
        assert!(Cli::try_parse_from(["globe-hero", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["globe-hero", "--segments", "2"]).is_err());
    }
}
