use pathforge_curve::CurveError;

/// Errors from level configuration, sampling and building.
///
/// Degenerate outcomes (empty regions, empty paths, single-tile chunks) are
/// not errors; they produce empty or minimal results.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("block of {rows}x{cols} cells does not fit a grid of {grid_size}x{grid_size}")]
    BlockExceedsGrid { rows: i32, cols: i32, grid_size: i32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
