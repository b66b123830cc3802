use std::path::Path;

use pathforge_curve::MAX_LEVEL;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Requested chunk footprint. Each build draws
/// `rows + [0, random_delta]` by `cols + [0, random_delta]` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockShape {
    /// Extent along X.
    pub rows: i32,
    /// Extent along Y.
    pub cols: i32,
    pub random_delta: i32,
}

impl Default for BlockShape {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            random_delta: 2,
        }
    }
}

/// Level generation configuration.
///
/// Missing fields in a config file fall back to [`LevelConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Base curve recursion depth. Regions are sampled on a `2^level` grid.
    pub level: u32,
    /// Each chunk's curve is `level + [0, depth_jitter]` deep.
    pub depth_jitter: u32,
    /// Number of chained chunks.
    pub chunk_count: usize,
    pub block: BlockShape,
    /// World units per cell for placed tiles.
    pub scale: f32,
    /// Cell size handed to the curve generator.
    pub cell_size: f32,
    /// Outward padding of the camera framing corners.
    pub margin: f32,
    /// Divisor turning the framed extent into an orthographic size.
    pub zoom_limiter: f32,
    pub seed: u64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            level: 6,
            depth_jitter: 2,
            chunk_count: 1,
            block: BlockShape::default(),
            scale: 10.0,
            cell_size: 1.0,
            margin: 10.0,
            zoom_limiter: 50.0,
            seed: 0,
        }
    }
}

impl LevelConfig {
    /// Load a config file: `.json` is parsed as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_yaml_str(&text)?,
        };
        tracing::debug!(path = %path.display(), "loaded level config");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, LevelError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, LevelError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Cells per side of the sampling grid.
    pub fn grid_size(&self) -> i32 {
        1 << self.level.min(MAX_LEVEL)
    }

    /// Reject values no build could succeed with.
    ///
    /// Blocks larger than the grid are reported by the sampler, since the
    /// random delta decides whether a given draw fits.
    pub fn validate(&self) -> Result<(), LevelError> {
        if !(1..=MAX_LEVEL).contains(&self.level) {
            return Err(LevelError::InvalidConfig(format!(
                "level {} is outside 1..={MAX_LEVEL}",
                self.level
            )));
        }
        if self.level.saturating_add(self.depth_jitter) > MAX_LEVEL {
            return Err(LevelError::InvalidConfig(format!(
                "level {} with jitter {} exceeds {MAX_LEVEL}",
                self.level, self.depth_jitter
            )));
        }
        if self.chunk_count == 0 {
            return Err(LevelError::InvalidConfig("chunk_count must be at least 1".into()));
        }
        if self.block.random_delta < 0 {
            return Err(LevelError::InvalidConfig(format!(
                "random_delta must not be negative, got {}",
                self.block.random_delta
            )));
        }
        for (name, value) in [
            ("scale", self.scale),
            ("cell_size", self.cell_size),
            ("zoom_limiter", self.zoom_limiter),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LevelError::InvalidConfig(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !self.margin.is_finite() {
            return Err(LevelError::InvalidConfig("margin must be finite".into()));
        }
        Ok(())
    }
}
