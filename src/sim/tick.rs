//! Simulation tick
//!
//! One tick, in order: pointer events → hold step or free motion →
//! container rotation → collision resolution.

use super::collision::resolve_collisions;
use super::interaction::InputEvent;
use super::state::Simulation;

/// Advance the simulation by `dt`, applying `events` in order first
pub fn tick(sim: &mut Simulation, events: &[InputEvent], dt: f32) {
    for event in events {
        sim.handle_event(*event, dt);
    }

    // Held ball follows the pointer; otherwise physics moves it
    if !sim.drag.follow(&mut sim.ball, dt) {
        sim.integrate_free(dt);
    }

    sim.container.rotate(dt);
    let surface = sim.surface();
    resolve_collisions(&mut sim.ball, &sim.container, surface);

    sim.time_ticks += 1;
}

impl Simulation {
    /// Advance one tick (see [`tick`])
    pub fn advance(&mut self, dt: f32, events: &[InputEvent]) {
        tick(self, events, dt);
    }

    /// Apply a single pointer event.
    ///
    /// `dt` is the current tick's step, used if a release has to flush a
    /// pending pointer move.
    pub fn handle_event(&mut self, event: InputEvent, dt: f32) {
        match event {
            InputEvent::PointerDown { pos } => {
                let reach = self.grab_reach();
                self.drag.try_grab(&self.ball, pos, reach);
            }
            InputEvent::PointerMove { pos } => self.drag.pointer_moved(pos),
            InputEvent::PointerUp => self.drag.release(&mut self.ball, dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::hexagon::Container;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    /// Smallest signed distance from the ball center to any side, inward
    fn min_edge_distance(pos: Vec2, container: &Container) -> f32 {
        container
            .edges()
            .iter()
            .filter_map(|edge| {
                let normal = edge.inward_normal(container.center)?;
                Some((pos - edge.start).dot(normal))
            })
            .fold(f32::INFINITY, f32::min)
    }

    fn still_config() -> SimConfig {
        SimConfig {
            angular_speed: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_free_tick_applies_gravity() {
        // Default start: (450, 230) moving right, well inside the container
        let mut sim = Simulation::default();
        let before = sim.ball_velocity();
        sim.advance(DT, &[]);

        assert!((sim.ball_velocity().y - (before.y + 15.0)).abs() < 1e-3);
        assert!((sim.ball_velocity().x - 180.0).abs() < 1e-3);
        assert!(min_edge_distance(sim.ball_position(), &sim.container) >= 18.0 - 1e-3);
        assert!((sim.container.angle - crate::consts::ANGULAR_SPEED * DT).abs() < 1e-6);
        assert_eq!(sim.time_ticks, 1);
    }

    #[test]
    fn test_grab_and_move() {
        let mut sim = Simulation::new(SimConfig {
            initial_ball_position: Vec2::new(300.0, 300.0),
            ..Default::default()
        });

        sim.advance(DT, &[InputEvent::PointerDown { pos: Vec2::new(300.0, 300.0) }]);
        assert!(sim.is_held());
        // Held with no movement: ball stays put, no gravity
        assert_eq!(sim.ball_position(), Vec2::new(300.0, 300.0));

        sim.advance(DT, &[InputEvent::PointerMove { pos: Vec2::new(310.0, 300.0) }]);
        assert_eq!(sim.ball_position(), Vec2::new(310.0, 300.0));
        let throw = sim.throw_velocity().expect("held");
        assert!((throw - Vec2::new(600.0, 0.0)).length() < 1e-2);
    }

    #[test]
    fn test_missed_grab_stays_free() {
        let mut sim = Simulation::default();
        sim.advance(DT, &[InputEvent::PointerDown { pos: Vec2::new(100.0, 100.0) }]);
        assert!(!sim.is_held());
        // Gravity still acted
        assert!(sim.ball_velocity().y > 0.0);
    }

    #[test]
    fn test_release_applies_throw_velocity() {
        let mut sim = Simulation::new(SimConfig {
            initial_ball_position: Vec2::new(450.0, 350.0),
            ..Default::default()
        });
        sim.advance(DT, &[InputEvent::PointerDown { pos: Vec2::new(450.0, 350.0) }]);
        sim.advance(DT, &[InputEvent::PointerMove { pos: Vec2::new(445.0, 340.0) }]);
        let throw = sim.throw_velocity().expect("held");

        sim.handle_event(InputEvent::PointerUp, DT);
        assert!(!sim.is_held());
        assert_eq!(sim.ball_velocity(), throw);
    }

    #[test]
    fn test_throw_independent_of_gravity() {
        let throw_for = |gravity: Vec2| {
            let mut sim = Simulation::new(SimConfig {
                gravity,
                initial_ball_position: Vec2::new(450.0, 350.0),
                ..Default::default()
            });
            sim.advance(DT, &[InputEvent::PointerDown { pos: Vec2::new(450.0, 350.0) }]);
            sim.advance(DT, &[InputEvent::PointerMove { pos: Vec2::new(460.0, 345.0) }]);
            sim.handle_event(InputEvent::PointerUp, DT);
            sim.ball_velocity()
        };
        assert_eq!(throw_for(Vec2::ZERO), throw_for(Vec2::new(0.0, 900.0)));
        assert_eq!(throw_for(Vec2::ZERO), throw_for(Vec2::new(-400.0, 2000.0)));
    }

    #[test]
    fn test_move_and_release_in_same_tick() {
        let mut sim = Simulation::new(SimConfig {
            gravity: Vec2::ZERO,
            initial_ball_position: Vec2::new(450.0, 350.0),
            ..still_config()
        });
        sim.advance(DT, &[InputEvent::PointerDown { pos: Vec2::new(450.0, 350.0) }]);
        sim.advance(
            DT,
            &[
                InputEvent::PointerMove { pos: Vec2::new(455.0, 350.0) },
                InputEvent::PointerUp,
            ],
        );
        assert!(!sim.is_held());
        assert!((sim.ball_velocity() - Vec2::new(300.0, 0.0)).length() < 1e-2);
        // Ball then moved freely for the rest of the tick
        assert!((sim.ball_position().x - 460.0).abs() < 1e-2);
    }

    #[test]
    fn test_release_when_free_is_noop() {
        let mut sim = Simulation::default();
        let vel = sim.ball_velocity();
        sim.handle_event(InputEvent::PointerUp, DT);
        assert_eq!(sim.ball_velocity(), vel);
    }

    #[test]
    fn test_held_ball_dragged_outside_is_pushed_back() {
        let mut sim = Simulation::new(SimConfig {
            initial_ball_position: Vec2::new(450.0, 350.0),
            ..still_config()
        });
        sim.advance(DT, &[InputEvent::PointerDown { pos: Vec2::new(450.0, 350.0) }]);
        // Just past the bottom side
        sim.advance(DT, &[InputEvent::PointerMove { pos: Vec2::new(450.0, 560.0) }]);
        assert!(sim.is_held());
        assert!(min_edge_distance(sim.ball_position(), &sim.container) >= 18.0 - 1e-3);
    }

    #[test]
    fn test_zero_dt_tick() {
        let mut sim = Simulation::default();
        let pos = sim.ball_position();
        let vel = sim.ball_velocity();
        sim.advance(0.0, &[]);
        assert_eq!(sim.ball_position(), pos);
        assert_eq!(sim.ball_velocity(), vel);
        assert_eq!(sim.container.angle, 0.0);
    }

    #[test]
    fn test_bounces_lose_normal_speed() {
        // No gravity, still container: the ball bounces straight up and down
        // between the top and bottom sides.
        let mut sim = Simulation::new(SimConfig {
            gravity: Vec2::ZERO,
            initial_ball_position: Vec2::new(450.0, 350.0),
            initial_ball_velocity: Vec2::new(0.0, 600.0),
            ..still_config()
        });

        let mut bottom_hits = Vec::new();
        let mut last_vy = sim.ball_velocity().y;
        for _ in 0..2000 {
            sim.advance(DT, &[]);
            let vy = sim.ball_velocity().y;
            if last_vy > 0.0 && vy < 0.0 {
                bottom_hits.push(vy.abs());
            }
            last_vy = vy;
        }

        assert!(bottom_hits.len() >= 3, "only {} bounces", bottom_hits.len());
        for pair in bottom_hits.windows(2) {
            assert!(pair[1] < pair[0], "{:?}", bottom_hits);
        }
        // First bounce keeps 85% of the approach speed
        assert!((bottom_hits[0] - 510.0).abs() < 1e-2);
    }

    #[test]
    fn test_ball_never_escapes() {
        let mut sim = Simulation::default();
        for _ in 0..60 * 30 {
            sim.advance(DT, &[]);
            let dist = min_edge_distance(sim.ball_position(), &sim.container);
            assert!(dist >= 18.0 - 1e-2, "penetration at tick {}: {}", sim.time_ticks, dist);
        }
    }

    #[test]
    fn test_independent_simulations() {
        let mut a = Simulation::default();
        let mut b = Simulation::default();
        for _ in 0..120 {
            a.advance(DT, &[]);
        }
        assert_eq!(b.time_ticks, 0);
        for _ in 0..120 {
            b.advance(DT, &[]);
        }
        assert_eq!(a.ball_position(), b.ball_position());
        assert_eq!(a.ball_velocity(), b.ball_velocity());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: after any tick from a contained start, no side is penetrated
            #[test]
            fn prop_containment_after_tick(
                r in 0.0f32..180.0f32,
                theta in 0.0f32..std::f32::consts::TAU,
                vx in -600.0f32..600.0f32,
                vy in -600.0f32..600.0f32,
                angle in 0.0f32..std::f32::consts::TAU,
                angular_speed in -3.0f32..3.0f32,
            ) {
                let center = crate::consts::CONTAINER_CENTER;
                let mut sim = Simulation::new(SimConfig {
                    initial_ball_position: center + Vec2::from_angle(theta) * r,
                    initial_ball_velocity: Vec2::new(vx, vy),
                    angular_speed,
                    ..Default::default()
                });
                sim.container.angle = angle;
                sim.advance(DT, &[]);
                let dist = min_edge_distance(sim.ball_position(), &sim.container);
                prop_assert!(dist >= 18.0 - 1e-2, "residual penetration {}", 18.0 - dist);
            }

            /// Property: a held ball sits exactly at pointer + offset, whatever gravity is
            #[test]
            fn prop_held_ball_follows_pointer(
                gx in -5000.0f32..5000.0f32,
                gy in -5000.0f32..5000.0f32,
                ox in -15.0f32..15.0f32,
                oy in -15.0f32..15.0f32,
                targets in prop::collection::vec((-100.0f32..100.0f32, -100.0f32..100.0f32), 1..10),
            ) {
                let center = crate::consts::CONTAINER_CENTER;
                let mut sim = Simulation::new(SimConfig {
                    gravity: Vec2::new(gx, gy),
                    initial_ball_position: center,
                    ..Default::default()
                });
                let down = center + Vec2::new(ox, oy);
                sim.advance(DT, &[InputEvent::PointerDown { pos: down }]);
                prop_assert!(sim.is_held());
                let offset = center - down;

                for (tx, ty) in targets {
                    let pointer = center + Vec2::new(tx, ty);
                    sim.advance(DT, &[InputEvent::PointerMove { pos: pointer }]);
                    prop_assert_eq!(sim.ball_position(), pointer + offset);
                }
            }
        }
    }
}
