use glam::IVec2;
use pathforge_curve::{Curve, CurvePoint};
use serde::{Deserialize, Serialize};

use crate::region::Region;

/// A curve point accepted into a path.
pub type PathPoint = CurvePoint;

/// Curve points inside a region, in traversal order, each a 4-neighbor of the one before.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<PathPoint>,
}

impl Path {
    /// Wrap points without checking adjacency. The assembler re-checks it.
    pub fn from_points(points: Vec<PathPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PathPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PathPoint> {
        self.points.last()
    }

    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.points.iter().map(|p| p.cell)
    }

    /// True when every consecutive pair is one cell apart along one axis.
    pub fn is_connected(&self) -> bool {
        self.points.windows(2).all(|w| w[1].is_neighbor_of(&w[0]))
    }
}

/// Greedy single pass over `curve` keeping the points that fall in `region`.
///
/// The first in-region point seeds the path. Each later in-region point is
/// kept only if it neighbors the last kept point; otherwise it is skipped.
/// There is no backtracking: if the curve leaves the region and re-enters
/// away from the last kept point, that whole later run is dropped, even when
/// it is contiguous on its own.
pub fn extract_path(curve: &Curve, region: &Region) -> Path {
    let mut points: Vec<PathPoint> = Vec::new();
    let mut skipped = 0usize;

    for point in curve {
        if !region.contains(point.cell) {
            continue;
        }
        if points.last().is_none_or(|last| point.is_neighbor_of(last)) {
            points.push(*point);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        tracing::debug!(
            kept = points.len(),
            skipped,
            "dropped in-region points not adjacent to the path"
        );
    }

    let path = Path { points };
    debug_assert!(path.is_connected(), "extracted path has a gap");
    path
}
