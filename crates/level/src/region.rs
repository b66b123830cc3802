use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;

use crate::config::BlockShape;
use crate::error::LevelError;

/// A set of grid cells selecting part of a curve.
///
/// Membership is exact cell equality; a region need not be a rectangle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    cells: HashSet<IVec2>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense rectangle of `rows` cells along X by `cols` cells along Y.
    /// Non-positive extents give an empty region.
    pub fn rect(origin: IVec2, rows: i32, cols: i32) -> Self {
        let mut cells = HashSet::with_capacity((rows.max(0) * cols.max(0)) as usize);
        for x in 0..rows {
            for y in 0..cols {
                cells.insert(origin + IVec2::new(x, y));
            }
        }
        Self { cells }
    }

    pub fn insert(&mut self, cell: IVec2) -> bool {
        self.cells.insert(cell)
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<IVec2> for Region {
    fn from_iter<I: IntoIterator<Item = IVec2>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Pick a random rectangle of `shape` inside a `grid_size` grid.
///
/// Draw order is rows, cols, then origin X and Y, so a seeded RNG reproduces
/// the same region. A non-positive drawn extent yields an empty region; a
/// block larger than the grid is a configuration error, never clamped.
pub fn sample(grid_size: i32, shape: &BlockShape, rng: &mut impl Rng) -> Result<Region, LevelError> {
    if shape.random_delta < 0 {
        return Err(LevelError::InvalidConfig(format!(
            "random_delta must not be negative, got {}",
            shape.random_delta
        )));
    }

    let drawn_rows = rng.gen_range(0..=shape.random_delta);
    let drawn_cols = rng.gen_range(0..=shape.random_delta);
    let (Some(rows), Some(cols)) = (
        shape.rows.checked_add(drawn_rows),
        shape.cols.checked_add(drawn_cols),
    ) else {
        return Err(LevelError::InvalidConfig(format!(
            "block {}x{} with delta {} overflows",
            shape.rows, shape.cols, shape.random_delta
        )));
    };
    if rows <= 0 || cols <= 0 {
        tracing::warn!(rows, cols, "degenerate block shape, region is empty");
        return Ok(Region::new());
    }

    let max_x = grid_size - rows;
    let max_y = grid_size - cols;
    if max_x < 0 || max_y < 0 {
        return Err(LevelError::BlockExceedsGrid {
            rows,
            cols,
            grid_size,
        });
    }

    let origin = IVec2::new(rng.gen_range(0..=max_x), rng.gen_range(0..=max_y));
    tracing::debug!(rows, cols, %origin, "sampled region");
    Ok(Region::rect(origin, rows, cols))
}
