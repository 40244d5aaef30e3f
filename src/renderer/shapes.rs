//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::polar_to_cartesian;
use crate::sim::Simulation;

/// Container outline width (pixels)
pub const OUTLINE_WIDTH: f32 = 4.0;
/// Triangles used for the ball disc
pub const BALL_SEGMENTS: u32 = 32;

/// Triangle fan for a filled disc, flattened to a triangle list.
///
/// Rim point `i` sits at `i / segments` of a turn, same convention as the
/// hexagon vertices.
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let step = TAU / segments.max(1) as f32;
    let rim = |i: u32| polar_to_cartesian(center, radius, i as f32 * step);

    (0..segments)
        .flat_map(|i| [center, rim(i), rim(i + 1)])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Generate vertices for a closed polygon outline.
///
/// Each side becomes a quad of the given width centered on the side, so
/// corners overlap slightly.
pub fn polygon_outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(n * 6);

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        let dir = (p2 - p1).normalize_or_zero();
        // Perpendicular for width, extended past the ends to close the corners
        let perp = dir.perp() * half;
        let ext = dir * half;

        let v1a = p1 - ext + perp;
        let v1b = p1 - ext - perp;
        let v2a = p2 + ext + perp;
        let v2b = p2 + ext - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Triangle list for one frame: container outline, then the ball on top
pub fn frame(sim: &Simulation) -> Vec<Vertex> {
    let mut vertices = polygon_outline(&sim.container_vertices(), OUTLINE_WIDTH, colors::CONTAINER);
    vertices.extend(circle(
        sim.ball_position(),
        sim.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));
    vertices
}
