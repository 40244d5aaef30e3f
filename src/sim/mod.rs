//! Deterministic simulation module
//!
//! All physics and interaction logic lives here. This module must be pure and deterministic:
//! - Time advances only through `tick`/`Simulation::advance`
//! - Fixed edge order (0 through 5) in collision resolution
//! - No rendering or platform dependencies

pub mod collision;
pub mod hexagon;
pub mod interaction;
pub mod script;
pub mod state;
pub mod tick;

pub use collision::{EdgeContact, Surface, edge_contact, resolve_collisions};
pub use hexagon::{Container, Edge, SIDES, hexagon_vertices};
pub use interaction::{DragState, Grab, InputEvent};
pub use script::{Script, ScriptStep, Snapshot, replay, run_script};
pub use state::{Ball, Simulation};
pub use tick::tick;
