//! Shared types for the pathforge workspace: tile descriptors, grid directions, bounds.

mod bounds;
mod types;

pub use bounds::Bounds2;
pub use types::{Direction, TileDescriptor, TileKind};
