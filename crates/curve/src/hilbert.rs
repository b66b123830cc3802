use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Deepest recursion accepted by [`generate`]. A level-`n` curve holds `4^n` points.
pub const MAX_LEVEL: u32 = 10;

/// Errors from curve generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("curve level {0} is outside 1..={max}", max = MAX_LEVEL)]
    InvalidLevel(u32),
    #[error("cell size must be finite and positive, got {0}")]
    InvalidCellSize(f32),
}

/// One visit of the curve, immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Rank in traversal order.
    pub index: usize,
    /// `(index / grid_size, index % grid_size)`.
    pub grid: IVec2,
    /// Integer cell this point occupies; equals `from / cell_size`.
    pub cell: IVec2,
    /// World position of the point.
    pub from: Vec2,
    /// World position after this point's step.
    pub to: Vec2,
    /// Heading of the step in degrees, see [`step_rotation`].
    pub rotation: f32,
}

impl CurvePoint {
    /// True when `other` sits exactly one cell away along a single axis.
    pub fn is_neighbor_of(&self, other: &CurvePoint) -> bool {
        let d = (self.cell - other.cell).abs();
        d.x + d.y == 1
    }
}

/// Rotation for a single step `from -> to`, on world positions:
/// `(from.x - to.x) * 90 + (to.y < from.y ? 180 : 0)`.
///
/// The X term scales with the cell size; at `cell_size == 1` it yields the
/// quarter turns `-90`, `0`, `90`.
pub fn step_rotation(from: Vec2, to: Vec2) -> f32 {
    let turn = (from.x - to.x) * 90.0;
    if to.y - from.y < 0.0 { turn + 180.0 } else { turn }
}

/// Cell size that makes a level-`level` curve span 80% of `extent`.
pub fn fit_cell_size(extent: f32, level: u32) -> Result<f32, CurveError> {
    check_level(level)?;
    let segments = ((1u32 << level) - 1) as f32;
    Ok(0.8 * extent / segments)
}

/// An ordered Hilbert curve over a `2^level x 2^level` grid.
///
/// Consecutive points are always 4-neighbors; every cell of the grid is
/// visited exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    level: u32,
    cell_size: f32,
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Cells per side, `2^level`.
    pub fn grid_size(&self) -> i32 {
        1 << self.level
    }

    /// Points in traversal order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// World position of the first point, or the origin for an empty curve.
    pub fn first_position(&self) -> Vec2 {
        self.points.first().map(|p| p.from).unwrap_or(Vec2::ZERO)
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Generate the curve for `level` with cells `cell_size` world units wide.
///
/// Pure function of its arguments. The cursor lives in a tracer scoped to
/// this call.
pub fn generate(level: u32, cell_size: f32) -> Result<Curve, CurveError> {
    check_level(level)?;
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(CurveError::InvalidCellSize(cell_size));
    }

    let grid_size = 1i32 << level;
    let mut tracer = Tracer {
        cursor: IVec2::ZERO,
        grid_size,
        cell_size,
        points: Vec::with_capacity(1usize << (2 * level)),
    };
    tracer.expand(level, 1, 0);
    tracer.close();

    tracing::debug!(level, points = tracer.points.len(), "generated hilbert curve");

    Ok(Curve {
        level,
        cell_size,
        points: tracer.points,
    })
}

fn check_level(level: u32) -> Result<(), CurveError> {
    if (1..=MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(CurveError::InvalidLevel(level))
    }
}

/// Walks the recursion with an explicit cell cursor.
struct Tracer {
    cursor: IVec2,
    grid_size: i32,
    cell_size: f32,
    points: Vec<CurvePoint>,
}

impl Tracer {
    fn expand(&mut self, depth: u32, dx: i32, dy: i32) {
        if depth > 1 {
            self.expand(depth - 1, dy, dx);
        }
        self.emit(dx, dy);
        if depth > 1 {
            self.expand(depth - 1, dx, dy);
        }
        self.emit(dy, dx);
        if depth > 1 {
            self.expand(depth - 1, dx, dy);
        }
        self.emit(-dx, -dy);
        if depth > 1 {
            self.expand(depth - 1, -dy, -dx);
        }
    }

    fn emit(&mut self, dx: i32, dy: i32) {
        let from = self.cursor;
        let to = from + IVec2::new(dx, dy);
        self.push(from, to);
        self.cursor = to;
    }

    /// The recursion ends on a cell it never steps out of; record it so the
    /// grid is covered.
    fn close(&mut self) {
        let last = self.cursor;
        self.push(last, last);
    }

    fn push(&mut self, from: IVec2, to: IVec2) {
        let index = self.points.len();
        let n = self.grid_size as usize;
        let grid = IVec2::new((index / n) as i32, (index % n) as i32);
        let cell = self.checked_cell(from);
        let from = cell.as_vec2() * self.cell_size;
        let to = to.as_vec2() * self.cell_size;
        self.points.push(CurvePoint {
            index,
            grid,
            cell,
            from,
            to,
            rotation: step_rotation(from, to),
        });
    }

    fn checked_cell(&self, cell: IVec2) -> IVec2 {
        let upper = IVec2::splat(self.grid_size - 1);
        let in_range = cell.cmpge(IVec2::ZERO).all() && cell.cmple(upper).all();
        debug_assert!(in_range, "curve cell {cell} outside grid of {}", self.grid_size);
        if !in_range {
            tracing::error!(%cell, grid_size = self.grid_size, "curve cell outside grid, clamping");
        }
        cell.clamp(IVec2::ZERO, upper)
    }
}
