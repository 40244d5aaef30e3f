//! Simulation state and core types
//!
//! A `Simulation` owns everything that changes over time: the ball, the
//! container's rotation, and the grab state. Several can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Surface;
use super::hexagon::{Container, SIDES};
use super::interaction::DragState;
use crate::config::SimConfig;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Accumulate a force over dt (semi-implicit Euler, velocity half)
    pub fn apply_force(&mut self, force: Vec2, mass: f32, dt: f32) {
        self.vel += (force / mass) * dt;
    }

    /// Advance position with the current velocity
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub config: SimConfig,
    pub ball: Ball,
    pub container: Container,
    pub drag: DragState,
    /// Ticks advanced so far
    pub time_ticks: u64,
}

impl Simulation {
    /// Build a simulation from its configuration.
    ///
    /// The configuration is taken as-is; see `SimConfig::validate`.
    pub fn new(config: SimConfig) -> Self {
        let ball = Ball::new(
            config.initial_ball_position,
            config.initial_ball_velocity,
            config.ball_radius,
        );
        let container = Container::new(
            config.container_center,
            config.container_radius,
            config.angular_speed,
        );
        Self {
            config,
            ball,
            container,
            drag: DragState::Free,
            time_ticks: 0,
        }
    }

    /// Restart from the initial configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Free-motion step: gravity, then move.
    ///
    /// `gravity` is applied as a force, so a heavier ball accelerates less.
    pub fn integrate_free(&mut self, dt: f32) {
        self.ball.apply_force(self.config.gravity, self.config.ball_mass, dt);
        self.ball.integrate(dt);
    }

    /// Restitution and friction for wall contacts
    pub fn surface(&self) -> Surface {
        Surface {
            restitution: self.config.restitution,
            friction: self.config.friction,
        }
    }

    /// Pointer reach for grabbing the ball
    pub fn grab_reach(&self) -> f32 {
        self.ball.radius + self.config.grab_tolerance
    }

    #[inline]
    pub fn ball_position(&self) -> Vec2 {
        self.ball.pos
    }

    #[inline]
    pub fn ball_velocity(&self) -> Vec2 {
        self.ball.vel
    }

    /// Container vertices at the current rotation
    pub fn container_vertices(&self) -> [Vec2; SIDES] {
        self.container.vertices()
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.drag.is_held()
    }

    /// Throw velocity of the active grab
    pub fn throw_velocity(&self) -> Option<Vec2> {
        self.drag.grab().map(|g| g.throw_velocity)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
