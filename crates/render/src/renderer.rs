use std::collections::HashMap;
use std::fmt::Write;

use glam::IVec2;
use pathforge_camera::FramingCamera;
use pathforge_common::{TileDescriptor, TileKind};
use pathforge_level::LevelDescriptor;

/// Largest map (in cells) the text renderer will draw.
const MAX_MAP_CELLS: i64 = 200 * 200;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a level descriptor and a camera, then produces output.
/// It never mutates the level.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `level` as seen by `camera`.
    fn render(&self, level: &LevelDescriptor, camera: &FramingCamera) -> Self::Output;
}

/// Text renderer, a stand-in for a graphical backend.
///
/// Prints a summary header and a character map with one cell per tile:
/// `S` start, `E` end, `-`/`|` straight, `+` corner. Where chunks overlap,
/// the later tile wins.
#[derive(Debug, Clone, Copy)]
pub struct AsciiRenderer {
    /// World units per map cell; matches the level's tile scale.
    pub scale: f32,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl AsciiRenderer {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    fn cell_of(&self, tile: &TileDescriptor) -> IVec2 {
        (tile.position / self.scale).round().as_ivec2()
    }
}

fn glyph(tile: &TileDescriptor) -> char {
    match tile.kind {
        TileKind::Start => 'S',
        TileKind::End => 'E',
        TileKind::Corner => '+',
        TileKind::Straight if tile.rotation == 90.0 => '|',
        TileKind::Straight => '-',
    }
}

impl Renderer for AsciiRenderer {
    type Output = String;

    fn render(&self, level: &LevelDescriptor, camera: &FramingCamera) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Level (tiles={}, chunks={}) ===",
            level.tile_count(),
            level.chunks.len()
        );
        let _ = writeln!(
            out,
            "Kinds: start={} end={} straight={} corner={}",
            level.count_kind(TileKind::Start),
            level.count_kind(TileKind::End),
            level.count_kind(TileKind::Straight),
            level.count_kind(TileKind::Corner)
        );
        let _ = writeln!(
            out,
            "Anchors: start=({:.1}, {:.1}) end=({:.1}, {:.1})",
            level.start_point.x, level.start_point.y, level.end_point.x, level.end_point.y
        );
        let _ = writeln!(
            out,
            "Camera: center=({:.1}, {:.1}) size={:.2}",
            camera.position.x, camera.position.y, camera.orthographic_size
        );

        let Some(bounds) = level.bounds else {
            out.push_str("(empty level)\n");
            return out;
        };
        let _ = writeln!(
            out,
            "Bounds: min=({:.1}, {:.1}) max=({:.1}, {:.1})",
            bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
        );

        let cells: HashMap<IVec2, char> = level
            .tiles
            .iter()
            .map(|t| (self.cell_of(t), glyph(t)))
            .collect();
        let min = cells.keys().fold(IVec2::MAX, |a, c| a.min(*c));
        let max = cells.keys().fold(IVec2::MIN, |a, c| a.max(*c));
        let size = (max - min + IVec2::ONE).as_i64vec2();
        if size.x * size.y > MAX_MAP_CELLS {
            let _ = writeln!(out, "(map omitted: {}x{} cells)", size.x, size.y);
            return out;
        }

        for y in (min.y..=max.y).rev() {
            let row: String = (min.x..=max.x)
                .map(|x| cells.get(&IVec2::new(x, y)).copied().unwrap_or('.'))
                .collect();
            out.push_str(row.trim_end_matches('.'));
            out.push('\n');
        }
        out
    }
}
