//! Camera framing for generated levels.
//!
//! Centers an orthographic camera on a set of world points and zooms so the
//! largest extent fits.
//!
//! # Invariants
//! - The camera never mutates level data.
//! - A degenerate point set falls back to a fixed extent, never a zero zoom.

mod framing;

pub use framing::FramingCamera;

pub fn crate_info() -> &'static str {
    "pathforge-camera v0.1.0"
}
