//! Render geometry
//!
//! Builds triangle lists for the container and ball. Drawing them (window,
//! surface, GPU pipeline) is up to the host.

pub mod shapes;
pub mod vertex;

pub use shapes::{circle, frame, polygon_outline};
pub use vertex::{Vertex, as_bytes, colors};
