//! Grab-and-throw interaction
//!
//! While the pointer holds the ball, the ball follows the pointer exactly and
//! physics integration is skipped. Releasing hands the ball the velocity the
//! pointer was last moving at.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Ball;
use crate::consts::MIN_THROW_DT;

/// Pointer input the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Button pressed at a position
    PointerDown { pos: Vec2 },
    /// Pointer moved to a position
    PointerMove { pos: Vec2 },
    /// Button released
    PointerUp,
}

/// An active grab
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grab {
    /// Ball position minus pointer position at grab time
    pub grab_offset: Vec2,
    /// Pointer position at the previous hold step
    pub last_pointer: Vec2,
    /// Latest known pointer position
    pub pointer: Vec2,
    /// Pointer velocity as of the last hold step
    pub throw_velocity: Vec2,
}

/// Whether the pointer is holding the ball
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    /// Ball moves under physics
    #[default]
    Free,
    /// Ball is pinned to the pointer
    Held(Grab),
}

impl DragState {
    #[inline]
    pub fn is_held(&self) -> bool {
        matches!(self, DragState::Held(_))
    }

    /// The active grab, if any
    pub fn grab(&self) -> Option<&Grab> {
        match self {
            DragState::Held(grab) => Some(grab),
            DragState::Free => None,
        }
    }

    /// Start holding the ball if the pointer landed within reach of it.
    ///
    /// Returns true if a grab started. A press while already holding is ignored.
    pub fn try_grab(&mut self, ball: &Ball, pointer: Vec2, reach: f32) -> bool {
        if self.is_held() || pointer.distance(ball.pos) > reach {
            return false;
        }
        *self = DragState::Held(Grab {
            grab_offset: ball.pos - pointer,
            last_pointer: pointer,
            pointer,
            throw_velocity: Vec2::ZERO,
        });
        log::debug!("Grabbed ball at {} (pointer {})", ball.pos, pointer);
        true
    }

    /// Record a new pointer position (only meaningful while held)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        if let DragState::Held(grab) = self {
            grab.pointer = pos;
        }
    }

    /// Hold step: pin the ball to the pointer and derive throw velocity.
    ///
    /// Returns false (and leaves the ball alone) when not held.
    pub fn follow(&mut self, ball: &mut Ball, dt: f32) -> bool {
        let DragState::Held(grab) = self else {
            return false;
        };
        ball.pos = grab.pointer + grab.grab_offset;
        grab.throw_velocity = (grab.pointer - grab.last_pointer) / dt.max(MIN_THROW_DT);
        grab.last_pointer = grab.pointer;
        true
    }

    /// End the grab, throwing the ball with the last throw velocity.
    ///
    /// If the pointer moved since the last hold step, a hold step runs first
    /// so the throw reflects that final movement.
    pub fn release(&mut self, ball: &mut Ball, dt: f32) {
        let pending_move = matches!(self, DragState::Held(g) if g.pointer != g.last_pointer);
        if pending_move {
            self.follow(ball, dt);
        }
        if let DragState::Held(grab) = std::mem::take(self) {
            ball.vel = grab.throw_velocity;
            log::debug!("Released ball at {} with velocity {}", ball.pos, ball.vel);
        }
    }
}
