use glam::{IVec2, Vec2};
use pathforge_common::{Bounds2, TileDescriptor, TileKind};
use serde::{Deserialize, Serialize};

use crate::extract::Path;

/// Tiles placed for one extracted path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkResult {
    pub tiles: Vec<TileDescriptor>,
    /// `None` when no tile was placed.
    pub bounds: Option<Bounds2>,
    /// Cell of the first path point; tile positions are relative to it.
    pub pivot: IVec2,
    /// Offset (in cells) this chunk was placed at.
    pub offset: Vec2,
    /// `offset + (last - pivot)`: where the next chunk starts.
    pub end_anchor: Vec2,
}

impl ChunkResult {
    fn empty(offset: Vec2) -> Self {
        Self {
            tiles: Vec::new(),
            bounds: None,
            pivot: IVec2::ZERO,
            offset,
            end_anchor: offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Turn a path into placed tiles.
///
/// The first point becomes a `Start` at `offset * scale` and the pivot; the
/// rest land at `(cell - pivot + offset) * scale`. Interior points become
/// `Straight` or `Corner` from their neighbors, the last point an `End`.
/// A single-point path yields only the `Start`.
pub fn assemble_chunk(path: &Path, offset: Vec2, scale: f32) -> ChunkResult {
    let points = path.points();
    let Some(first) = points.first() else {
        return ChunkResult::empty(offset);
    };

    let pivot = first.cell;
    let place = |cell: IVec2| ((cell - pivot).as_vec2() + offset) * scale;

    let start = offset * scale;
    let mut bounds = Bounds2::from_point(start);
    let mut tiles = Vec::with_capacity(points.len());
    tiles.push(TileDescriptor::new(start, 0.0, TileKind::Start));

    for i in 1..points.len() {
        let prev = points[i - 1].cell;
        let cur = points[i].cell;
        check_adjacent(prev, cur);

        let position = place(cur);
        bounds.encapsulate(position);

        let tile = match points.get(i + 1) {
            Some(next) => {
                let (kind, rotation) = classify_turn(prev, cur, next.cell);
                TileDescriptor::new(position, rotation, kind)
            }
            None => TileDescriptor::new(position, 0.0, TileKind::End),
        };
        tiles.push(tile);
    }

    let last = points[points.len() - 1].cell;
    ChunkResult {
        tiles,
        bounds: Some(bounds),
        pivot,
        offset,
        end_anchor: offset + (last - pivot).as_vec2(),
    }
}

/// Piece kind and rotation for `cur`, entered from `prev` and left toward `next`.
pub fn classify_turn(prev: IVec2, cur: IVec2, next: IVec2) -> (TileKind, f32) {
    let dp = cur - prev;
    let dn = cur - next;
    let turns = (dp.x != 0 && dn.y != 0) || (dn.x != 0 && dp.y != 0);
    if turns {
        (TileKind::Corner, corner_rotation(dp, dn))
    } else if dp.y != 0 {
        (TileKind::Straight, 90.0)
    } else {
        (TileKind::Straight, 0.0)
    }
}

/// Corner rotation keyed on `dp = cur - prev` and `dn = cur - next`.
pub fn corner_rotation(dp: IVec2, dn: IVec2) -> f32 {
    if dn.y < 0 {
        match dp.x {
            x if x > 0 => 0.0,
            0 => 180.0,
            _ => 270.0,
        }
    } else if dn.y > 0 {
        match dp.x {
            x if x < 0 => 180.0,
            0 => 270.0,
            _ => 90.0,
        }
    } else if dn.x > 0 {
        if dp.y > 0 { 90.0 } else { 0.0 }
    } else if dn.x < 0 {
        if dp.y < 0 { 270.0 } else { 180.0 }
    } else {
        0.0
    }
}

fn check_adjacent(prev: IVec2, cur: IVec2) {
    let d = (cur - prev).abs();
    let adjacent = d.x + d.y == 1;
    debug_assert!(adjacent, "path step {prev} -> {cur} is not a unit step");
    if !adjacent {
        tracing::error!(%prev, %cur, "non-adjacent path step, placing anyway");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_path;
    use crate::region::Region;

    fn path_in(level: u32, region: Region) -> Path {
        let curve = pathforge_curve::generate(level, 1.0).unwrap();
        extract_path(&curve, &region)
    }

    #[test]
    fn empty_path_gives_empty_chunk() {
        let chunk = assemble_chunk(&Path::default(), Vec2::new(2.0, 3.0), 10.0);
        assert!(chunk.is_empty());
        assert!(chunk.bounds.is_none());
        assert_eq!(chunk.end_anchor, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn single_point_chunk_has_only_start() {
        let path = path_in(1, [IVec2::ZERO].into_iter().collect());
        let chunk = assemble_chunk(&path, Vec2::new(1.0, 1.0), 10.0);

        assert_eq!(chunk.tiles.len(), 1);
        assert_eq!(chunk.tiles[0].kind, TileKind::Start);
        assert_eq!(chunk.tiles[0].position, Vec2::new(10.0, 10.0));
        assert!(!chunk.tiles.iter().any(|t| t.kind == TileKind::End));
        assert_eq!(chunk.end_anchor, Vec2::new(1.0, 1.0));
        assert!(chunk.bounds.unwrap().is_degenerate());
    }

    #[test]
    fn full_level_two_grid_turn_geometry() {
        let path = path_in(2, Region::rect(IVec2::ZERO, 4, 4));
        let chunk = assemble_chunk(&path, Vec2::ZERO, 1.0);
        let t = &chunk.tiles;

        assert_eq!(t.len(), 16);
        assert_eq!(t[0].kind, TileKind::Start);
        assert_eq!(t[15].kind, TileKind::End);
        assert_eq!(t[15].position, Vec2::new(0.0, 3.0));
        assert!(t[1..15].iter().all(|x| matches!(x.kind, TileKind::Straight | TileKind::Corner)));

        // (0,1): in from below, out to the right.
        assert_eq!((t[1].kind, t[1].rotation), (TileKind::Corner, 180.0));
        // (1,1): in from the left, out downward.
        assert_eq!((t[2].kind, t[2].rotation), (TileKind::Corner, 90.0));
        // (1,0): in from above, out to the right.
        assert_eq!((t[3].kind, t[3].rotation), (TileKind::Corner, 270.0));
        // (2,0): straight run along X.
        assert_eq!((t[4].kind, t[4].rotation), (TileKind::Straight, 0.0));
        // (3,0): in from the left, out upward.
        assert_eq!((t[5].kind, t[5].rotation), (TileKind::Corner, 0.0));
        // (3,1): in from below, out to the left.
        assert_eq!((t[6].kind, t[6].rotation), (TileKind::Corner, 90.0));

        let bounds = chunk.bounds.unwrap();
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(3.0, 3.0));
        assert_eq!(chunk.end_anchor, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn offset_and_scale_place_tiles() {
        let path = path_in(2, Region::rect(IVec2::ZERO, 1, 4));
        let chunk = assemble_chunk(&path, Vec2::new(5.0, -2.0), 2.0);
        let t = &chunk.tiles;

        assert_eq!(t.len(), 4);
        assert_eq!(t[0].position, Vec2::new(10.0, -4.0));
        assert_eq!((t[1].kind, t[1].rotation), (TileKind::Straight, 90.0));
        assert_eq!(t[1].position, Vec2::new(10.0, -2.0));
        assert_eq!(t[3].kind, TileKind::End);
        assert_eq!(t[3].position, Vec2::new(10.0, 2.0));
        assert_eq!(chunk.end_anchor, Vec2::new(5.0, 1.0));

        let bounds = chunk.bounds.unwrap();
        assert_eq!(bounds.min, Vec2::new(10.0, -4.0));
        assert_eq!(bounds.max, Vec2::new(10.0, 2.0));
    }

    #[test]
    fn positions_are_relative_to_pivot() {
        let path = path_in(2, Region::rect(IVec2::new(2, 0), 2, 1));
        let chunk = assemble_chunk(&path, Vec2::new(1.0, 0.0), 3.0);

        assert_eq!(chunk.pivot, IVec2::new(2, 0));
        assert_eq!(chunk.tiles[0].position, Vec2::new(3.0, 0.0));
        assert_eq!(chunk.tiles[1].kind, TileKind::End);
        assert_eq!(chunk.tiles[1].position, Vec2::new(6.0, 0.0));
        assert_eq!(chunk.end_anchor, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn end_tile_lands_on_end_anchor() {
        let path = path_in(4, Region::rect(IVec2::new(4, 4), 4, 4));
        let scale = 10.0;
        let chunk = assemble_chunk(&path, Vec2::new(-3.0, 7.0), scale);
        let end = chunk.tiles.last().unwrap();
        assert_eq!(end.kind, TileKind::End);
        assert_eq!(end.position, chunk.end_anchor * scale);
    }

    #[test]
    fn bounds_contain_every_tile() {
        let path = path_in(4, Region::rect(IVec2::new(1, 6), 7, 5));
        let chunk = assemble_chunk(&path, Vec2::new(2.0, -1.0), 4.0);
        let bounds = chunk.bounds.unwrap();
        for tile in &chunk.tiles {
            assert!(bounds.contains(tile.position));
        }
        let tight = Bounds2::from_points(chunk.tiles.iter().map(|t| t.position)).unwrap();
        assert_eq!(tight, bounds);
    }

    #[test]
    fn corner_table_families() {
        assert_eq!(corner_rotation(IVec2::X, IVec2::NEG_Y), 0.0);
        assert_eq!(corner_rotation(IVec2::NEG_X, IVec2::NEG_Y), 270.0);
        assert_eq!(corner_rotation(IVec2::NEG_X, IVec2::Y), 180.0);
        assert_eq!(corner_rotation(IVec2::X, IVec2::Y), 90.0);
        assert_eq!(corner_rotation(IVec2::Y, IVec2::X), 90.0);
        assert_eq!(corner_rotation(IVec2::NEG_Y, IVec2::X), 0.0);
        assert_eq!(corner_rotation(IVec2::Y, IVec2::NEG_X), 180.0);
        assert_eq!(corner_rotation(IVec2::NEG_Y, IVec2::NEG_X), 270.0);
    }

    #[test]
    fn straight_rotation_follows_axis() {
        let horizontal = classify_turn(IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0));
        assert_eq!(horizontal, (TileKind::Straight, 0.0));
        let vertical = classify_turn(IVec2::new(0, 2), IVec2::new(0, 1), IVec2::new(0, 0));
        assert_eq!(vertical, (TileKind::Straight, 90.0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not a unit step")]
    fn gap_in_path_fails_loudly_in_debug() {
        let curve = pathforge_curve::generate(2, 1.0).unwrap();
        let p = curve.points();
        let path = Path::from_points(vec![p[0], p[5]]);
        assemble_chunk(&path, Vec2::ZERO, 1.0);
    }
}
