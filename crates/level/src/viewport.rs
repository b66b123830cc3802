use glam::{IVec2, Vec2};
use pathforge_common::Direction;
use pathforge_curve::Curve;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::extract::{extract_path, Path};
use crate::region::Region;

/// A movable `rows x cols` window over the curve grid.
///
/// The origin is clamped per axis to `[0, grid_size - extent]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    origin: IVec2,
    rows: i32,
    cols: i32,
    grid_size: i32,
}

impl Viewport {
    /// A viewport at the grid origin. Fails if it does not fit the grid.
    pub fn new(grid_size: i32, rows: i32, cols: i32) -> Result<Self, LevelError> {
        if rows <= 0 || cols <= 0 {
            return Err(LevelError::InvalidConfig(format!(
                "viewport must be at least 1x1, got {rows}x{cols}"
            )));
        }
        if rows > grid_size || cols > grid_size {
            return Err(LevelError::BlockExceedsGrid {
                rows,
                cols,
                grid_size,
            });
        }
        Ok(Self {
            origin: IVec2::ZERO,
            rows,
            cols,
            grid_size,
        })
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    /// Largest origin the window can take.
    pub fn max_origin(&self) -> IVec2 {
        IVec2::new(self.grid_size - self.rows, self.grid_size - self.cols)
    }

    /// Move one cell. Returns false, leaving the viewport in place, when the
    /// move would leave the grid.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let target = self.origin + direction.delta();
        if target.cmplt(IVec2::ZERO).any() || target.cmpgt(self.max_origin()).any() {
            tracing::trace!(?direction, origin = %self.origin, "viewport move clamped");
            return false;
        }
        self.origin = target;
        true
    }

    /// Cells under the window.
    pub fn region(&self) -> Region {
        Region::rect(self.origin, self.rows, self.cols)
    }

    /// Path of `curve` inside the window.
    pub fn trace(&self, curve: &Curve) -> Path {
        extract_path(curve, &self.region())
    }
}

/// Overlay marker kind for a traced path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Start,
    End,
    Arrow,
}

/// A marker drawn over a path point. Arrows point toward the next point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathMarker {
    pub position: Vec2,
    pub rotation: f32,
    pub kind: MarkerKind,
}

/// Start, arrow and end markers for `path`, at the points' world positions.
pub fn path_markers(path: &Path) -> Vec<PathMarker> {
    let points = path.points();
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let kind = if i == 0 {
                MarkerKind::Start
            } else if i + 1 == n {
                MarkerKind::End
            } else {
                MarkerKind::Arrow
            };
            let rotation = points
                .get(i + 1)
                .map(|next| arrow_rotation(next.cell - p.cell))
                .unwrap_or(0.0);
            PathMarker {
                position: p.from,
                rotation,
                kind,
            }
        })
        .collect()
}

/// Heading for an arrow stepping by `d`; a downward step wins over X.
fn arrow_rotation(d: IVec2) -> f32 {
    if d.y < 0 {
        180.0
    } else if d.x > 0 {
        -90.0
    } else if d.x < 0 {
        90.0
    } else {
        0.0
    }
}
