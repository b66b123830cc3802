//! Rendering Adapter: renderer-agnostic interface over level descriptors.
//!
//! # Invariants
//! - Renderers never mutate level data; they only read descriptors.
//! - Visual resources belong to the rendering layer. A new level replaces
//!   every handle from the previous one (clear and rebuild, never patch).
//!
//! # Workaround
//! Provides a text renderer as a stand-in for a graphical backend. The
//! trait is stable; swap in a GPU implementation without changing consumers.

mod arena;
mod renderer;

pub use arena::TileArena;
pub use renderer::{AsciiRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "pathforge-render v0.1.0"
}
