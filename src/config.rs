//! Simulation configuration
//!
//! Fixed at construction. Loaded from JSON; every field is optional and falls
//! back to the defaults in `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Container;

/// Errors from loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Forces ===
    /// Constant gravitational acceleration
    pub gravity: Vec2,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_mass: f32,
    /// Fraction of normal speed kept after a wall hit (0 = dead, 1 = elastic)
    pub restitution: f32,
    /// Fraction of tangential slip removed per wall hit
    pub friction: f32,
    pub initial_ball_position: Vec2,
    pub initial_ball_velocity: Vec2,

    // === Container ===
    pub container_center: Vec2,
    /// Center-to-vertex distance
    pub container_radius: f32,
    /// Radians per second (positive = counter-clockwise in math convention)
    pub angular_speed: f32,

    // === Interaction ===
    /// Extra reach beyond the ball radius that still counts as a grab
    pub grab_tolerance: f32,

    // === Timing ===
    /// Fixed step rate (Hz)
    pub step_hz: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,

            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            restitution: RESTITUTION,
            friction: FRICTION,
            initial_ball_position: BALL_START_POS,
            initial_ball_velocity: BALL_START_VEL,

            container_center: CONTAINER_CENTER,
            container_radius: CONTAINER_RADIUS,
            angular_speed: ANGULAR_SPEED,

            grab_tolerance: GRAB_TOLERANCE,

            step_hz: STEP_HZ,
        }
    }
}

impl SimConfig {
    /// Fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.step_hz.max(1) as f32
    }

    /// Parse from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the values the simulation relies on being sane.
    ///
    /// `Simulation::new` never calls this; callers that accept outside
    /// configuration should.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let vectors = [
            ("gravity", self.gravity),
            ("initial_ball_position", self.initial_ball_position),
            ("initial_ball_velocity", self.initial_ball_velocity),
            ("container_center", self.container_center),
        ];
        for (field, v) in vectors {
            if !v.is_finite() {
                return Err(ConfigError::invalid(field, format!("{v} is not finite")));
            }
        }

        let scalars = [
            ("ball_radius", self.ball_radius),
            ("ball_mass", self.ball_mass),
            ("container_radius", self.container_radius),
        ];
        for (field, value) in scalars {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("{value} must be positive")));
            }
        }

        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::invalid(
                "restitution",
                format!("{} is outside [0, 1]", self.restitution),
            ));
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(ConfigError::invalid(
                "friction",
                format!("{} must be >= 0", self.friction),
            ));
        }
        if !self.angular_speed.is_finite() {
            return Err(ConfigError::invalid("angular_speed", "not finite"));
        }
        if !(self.grab_tolerance.is_finite() && self.grab_tolerance >= 0.0) {
            return Err(ConfigError::invalid(
                "grab_tolerance",
                format!("{} must be >= 0", self.grab_tolerance),
            ));
        }
        if self.step_hz == 0 {
            return Err(ConfigError::invalid("step_hz", "must be at least 1"));
        }

        let inradius = Container::inradius_for(self.container_radius);
        if self.ball_radius >= inradius {
            return Err(ConfigError::invalid(
                "ball_radius",
                format!("{} does not fit inside container (inradius {inradius})", self.ball_radius),
            ));
        }

        Ok(())
    }
}
