//! Hilbert curve generation.
//!
//! # Invariants
//! - A level-`n` curve has exactly `4^n` points covering the `2^n x 2^n` grid once each.
//! - Consecutive points are 4-neighbors; traversal order is the point order.
//! - Generation is a pure function of `(level, cell_size)`.

mod hilbert;

pub use hilbert::{
    fit_cell_size, generate, step_rotation, Curve, CurveError, CurvePoint, MAX_LEVEL,
};

pub fn crate_info() -> &'static str {
    "pathforge-curve v0.1.0"
}
