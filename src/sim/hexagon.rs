//! Hexagon geometry for the rotating container
//!
//! The container is a regular hexagon described by:
//! - center: fixed point the hexagon rotates about
//! - circumradius: distance from center to each vertex
//! - angle: current rotation (radians), advanced by angular_speed * dt each tick
//!
//! Vertices are derived from `angle` on demand and never stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::polar_to_cartesian;

/// Number of sides (and vertices) of the container
pub const SIDES: usize = 6;

/// Angular step between consecutive vertices (60°)
pub const VERTEX_STEP: f32 = TAU / SIDES as f32;

/// Vertices of a regular hexagon.
///
/// Vertex `i` sits at `angle + i * 60°` around `center`, at distance `radius`.
pub fn hexagon_vertices(center: Vec2, radius: f32, angle: f32) -> [Vec2; SIDES] {
    std::array::from_fn(|i| polar_to_cartesian(center, radius, angle + i as f32 * VERTEX_STEP))
}

/// One side of the hexagon, from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
}

impl Edge {
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Unit normal pointing toward `interior`, or `None` for a zero-length edge
    pub fn inward_normal(&self, interior: Vec2) -> Option<Vec2> {
        let normal = self.direction().perp().try_normalize()?;
        if normal.dot(interior - self.midpoint()) < 0.0 {
            Some(-normal)
        } else {
            Some(normal)
        }
    }
}

/// The rotating hexagonal container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// Fixed rotation center
    pub center: Vec2,
    /// Distance from center to each vertex
    pub circumradius: f32,
    /// Current rotation (radians)
    pub angle: f32,
    /// Rotation rate (radians/sec)
    pub angular_speed: f32,
}

impl Container {
    pub fn new(center: Vec2, circumradius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            circumradius,
            angle: 0.0,
            angular_speed,
        }
    }

    /// Advance rotation by angular_speed * dt
    pub fn rotate(&mut self, dt: f32) {
        self.angle += self.angular_speed * dt;
    }

    /// Current vertex positions
    pub fn vertices(&self) -> [Vec2; SIDES] {
        hexagon_vertices(self.center, self.circumradius, self.angle)
    }

    /// Edges in order: edge `i` joins vertex `i` to vertex `(i + 1) % 6`
    pub fn edges(&self) -> [Edge; SIDES] {
        edges_of(&self.vertices())
    }

    /// Distance from center to the middle of each side
    #[inline]
    pub fn inradius(&self) -> f32 {
        Self::inradius_for(self.circumradius)
    }

    /// Inradius of a hexagon with the given circumradius
    #[inline]
    pub fn inradius_for(circumradius: f32) -> f32 {
        circumradius * (VERTEX_STEP / 2.0).cos()
    }

    /// Velocity of a point rigidly attached to the container
    #[inline]
    pub fn point_velocity(&self, point: Vec2) -> Vec2 {
        (point - self.center).perp() * self.angular_speed
    }
}

/// Pair up consecutive vertices, wrapping the last back to the first
pub fn edges_of(vertices: &[Vec2; SIDES]) -> [Edge; SIDES] {
    std::array::from_fn(|i| Edge {
        start: vertices[i],
        end: vertices[(i + 1) % SIDES],
    })
}
