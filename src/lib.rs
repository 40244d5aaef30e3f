//! Hexspin - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, grab/throw, collisions)
//! - `config`: Simulation configuration with JSON load/save and validation
//! - `renderer`: Triangle geometry for an external renderer

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{InputEvent, Simulation};

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    use glam::Vec2;

    /// Surface dimensions the default container is centered in
    pub const SURFACE_WIDTH: f32 = 900.0;
    pub const SURFACE_HEIGHT: f32 = 700.0;

    /// Fixed simulation step rate (Hz)
    pub const STEP_HZ: u32 = 60;

    /// Gravity (pixels/s², y points down the screen)
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 900.0);

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 18.0;
    pub const BALL_MASS: f32 = 1.0;
    pub const RESTITUTION: f32 = 0.85;
    pub const FRICTION: f32 = 0.2;

    /// Container defaults
    pub const CONTAINER_CENTER: Vec2 = Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0);
    pub const CONTAINER_RADIUS: f32 = 240.0;
    /// 25 degrees per second
    pub const ANGULAR_SPEED: f32 = 25.0 * std::f32::consts::PI / 180.0;

    /// Extra reach around the ball that still counts as a grab
    pub const GRAB_TOLERANCE: f32 = 4.0;
    /// Floor on dt when deriving throw velocity
    pub const MIN_THROW_DT: f32 = 1e-6;

    /// Ball starts above the container center, moving right
    pub const BALL_START_POS: Vec2 = Vec2::new(CONTAINER_CENTER.x, CONTAINER_CENTER.y - 120.0);
    pub const BALL_START_VEL: Vec2 = Vec2::new(180.0, 0.0);
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    Vec2::new(center.x + r * theta.cos(), center.y + r * theta.sin())
}

