//! Collision detection and response against the rotating hexagon
//!
//! The ball is kept inside by checking it against each edge's line:
//! push out along the inward normal, then reflect the part of the velocity
//! moving into the wall (measured relative to the wall's own rotational
//! velocity) and bleed off tangential slip with friction.

use glam::Vec2;

use super::hexagon::{Container, Edge};
use super::state::Ball;

/// Surface response coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub restitution: f32,
    pub friction: f32,
}

/// Ball overlap with one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeContact {
    /// Unit normal pointing into the container
    pub normal: Vec2,
    /// Signed distance of the ball center from the edge line along the normal
    pub distance: f32,
    /// How far the ball boundary has crossed the edge line
    pub penetration: f32,
}

/// Check the ball against one edge.
///
/// Returns `None` for a degenerate edge or when the ball does not reach the
/// edge line (`penetration <= 0`).
pub fn edge_contact(
    ball_pos: Vec2,
    ball_radius: f32,
    edge: &Edge,
    interior: Vec2,
) -> Option<EdgeContact> {
    let normal = edge.inward_normal(interior)?;
    let distance = (ball_pos - edge.start).dot(normal);
    let penetration = ball_radius - distance;
    (penetration > 0.0).then_some(EdgeContact {
        normal,
        distance,
        penetration,
    })
}

/// Respond to a contact: positional correction, then impulse.
///
/// Wall velocity is sampled at the corrected ball position. The impulse is
/// applied only if the ball approaches the wall in the wall's frame.
/// Returns the normal relative speed at contact.
pub fn resolve_edge(
    ball: &mut Ball,
    contact: &EdgeContact,
    container: &Container,
    surface: Surface,
) -> f32 {
    let normal = contact.normal;
    ball.pos += normal * contact.penetration;

    let wall_vel = container.point_velocity(ball.pos);
    let rel_vel = ball.vel - wall_vel;

    let vn = rel_vel.dot(normal);
    if vn < 0.0 {
        // Reflect normal component with restitution
        ball.vel -= (1.0 + surface.restitution) * vn * normal;

        // Tangential friction, from the pre-impulse relative velocity
        let tangent = normal.perp();
        let vt = rel_vel.dot(tangent);
        ball.vel -= tangent * (vt * surface.friction);
    }
    vn
}

/// Resolve the ball against all six edges, in order, in a single pass.
///
/// Returns how many edges were in contact.
pub fn resolve_collisions(ball: &mut Ball, container: &Container, surface: Surface) -> usize {
    let edges = container.edges();
    let mut contacts = 0;

    for (i, edge) in edges.iter().enumerate() {
        let Some(contact) = edge_contact(ball.pos, ball.radius, edge, container.center) else {
            continue;
        };
        let vn = resolve_edge(ball, &contact, container, surface);
        log::trace!(
            "Edge {} contact: penetration={:.3} vn={:.3}",
            i,
            contact.penetration,
            vn
        );
        contacts += 1;
    }

    contacts
}
