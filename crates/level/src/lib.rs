//! Level generation: region sampling, greedy path extraction along a Hilbert
//! curve, and chunked tile assembly.
//!
//! # Invariants
//! - Consecutive path points are 4-neighbors in the curve's cell grid.
//! - Chunk `i + 1` is placed at chunk `i`'s end anchor.
//! - A level is built in full or not at all; builds never patch a previous level.
//! - All randomness comes from the RNG handed to a build.

mod assemble;
mod config;
mod error;
mod extract;
mod level;
mod region;
mod session;
mod viewport;

pub use assemble::{assemble_chunk, classify_turn, corner_rotation, ChunkResult};
pub use config::{BlockShape, LevelConfig};
pub use error::LevelError;
pub use extract::{extract_path, Path, PathPoint};
pub use level::{ChunkSpan, LevelAssembler, LevelDescriptor};
pub use region::{sample as sample_region, Region};
pub use session::LevelSession;
pub use viewport::{path_markers, MarkerKind, PathMarker, Viewport};

pub fn crate_info() -> &'static str {
    "pathforge-level v0.1.0"
}
