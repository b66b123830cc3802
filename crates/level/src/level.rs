use std::ops::Range;

use glam::Vec2;
use pathforge_common::{Bounds2, TileDescriptor, TileKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::assemble::assemble_chunk;
use crate::config::LevelConfig;
use crate::error::LevelError;
use crate::extract::extract_path;
use crate::region;

/// Bookkeeping for one chunk of a built level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkSpan {
    pub index: usize,
    /// Depth of the curve this chunk was cut from.
    pub curve_level: u32,
    pub region_cells: usize,
    pub path_len: usize,
    /// Slice of [`LevelDescriptor::tiles`] owned by this chunk.
    pub tile_range: Range<usize>,
    /// Offset (in cells) the chunk was placed at.
    pub offset: Vec2,
    /// Offset handed to the next chunk.
    pub end_anchor: Vec2,
}

/// A complete generated level. Each build produces a fresh descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    /// All chunks' tiles, in chunk order.
    pub tiles: Vec<TileDescriptor>,
    /// `None` when no chunk placed a tile.
    pub bounds: Option<Bounds2>,
    /// Position of the first `Start` tile.
    pub start_point: Vec2,
    /// Position of the last `End` tile, or `start_point` if there is none.
    pub end_point: Vec2,
    pub chunks: Vec<ChunkSpan>,
}

impl LevelDescriptor {
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    /// Tiles placed by chunk `index`. Empty for an unknown chunk or a range
    /// outside [`tiles`](Self::tiles).
    pub fn chunk_tiles(&self, index: usize) -> &[TileDescriptor] {
        self.chunks
            .get(index)
            .and_then(|c| self.tiles.get(c.tile_range.clone()))
            .unwrap_or(&[])
    }

    /// Bound corners padded by `margin`, for camera framing. Empty for an empty level.
    pub fn framing_points(&self, margin: f32) -> Vec<Vec2> {
        self.bounds
            .map(|b| b.padded_corners(margin).to_vec())
            .unwrap_or_default()
    }
}

/// Chains chunks of Hilbert-curve paths into one level.
#[derive(Debug, Clone)]
pub struct LevelAssembler {
    config: LevelConfig,
}

impl LevelAssembler {
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Build a level with a `ChaCha8Rng` seeded from the config.
    pub fn build_seeded(&self) -> Result<LevelDescriptor, LevelError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.build(&mut rng)
    }

    /// Build a level drawing all randomness from `rng`.
    ///
    /// Each chunk draws its depth jitter, generates a fresh curve, samples a
    /// region on the base grid, extracts a path and places it at the running
    /// offset. The next chunk starts at the previous chunk's end anchor.
    /// Errors abort the build; nothing partial is returned.
    pub fn build(&self, rng: &mut impl Rng) -> Result<LevelDescriptor, LevelError> {
        let cfg = &self.config;
        let _span = tracing::info_span!("level_build", chunks = cfg.chunk_count).entered();
        let grid_size = cfg.grid_size();

        let mut tiles: Vec<TileDescriptor> = Vec::new();
        let mut bounds: Option<Bounds2> = None;
        let mut chunks = Vec::with_capacity(cfg.chunk_count);
        let mut start_point: Option<Vec2> = None;
        let mut end_point: Option<Vec2> = None;
        let mut offset = Vec2::ZERO;

        for index in 0..cfg.chunk_count {
            let curve_level = cfg.level + rng.gen_range(0..=cfg.depth_jitter);
            let curve = pathforge_curve::generate(curve_level, cfg.cell_size)?;
            let region = region::sample(grid_size, &cfg.block, &mut *rng)?;
            let path = extract_path(&curve, &region);
            let chunk = assemble_chunk(&path, offset, cfg.scale);

            tracing::debug!(
                index,
                curve_level,
                region = region.len(),
                path = path.len(),
                "assembled chunk"
            );
            if chunk.is_empty() {
                tracing::warn!(index, "chunk produced no tiles");
            }

            for tile in &chunk.tiles {
                match tile.kind {
                    TileKind::Start => {
                        start_point.get_or_insert(tile.position);
                    }
                    TileKind::End => end_point = Some(tile.position),
                    TileKind::Straight | TileKind::Corner => {}
                }
            }
            if let Some(chunk_bounds) = chunk.bounds {
                match bounds.as_mut() {
                    Some(b) => b.merge(&chunk_bounds),
                    None => bounds = Some(chunk_bounds),
                }
            }

            let first_tile = tiles.len();
            tiles.extend_from_slice(&chunk.tiles);
            chunks.push(ChunkSpan {
                index,
                curve_level,
                region_cells: region.len(),
                path_len: path.len(),
                tile_range: first_tile..tiles.len(),
                offset,
                end_anchor: chunk.end_anchor,
            });
            offset = chunk.end_anchor;
        }

        let start_point = start_point.unwrap_or(Vec2::ZERO);
        let end_point = end_point.unwrap_or(start_point);

        tracing::info!(
            tiles = tiles.len(),
            chunks = chunks.len(),
            "level built"
        );

        Ok(LevelDescriptor {
            tiles,
            bounds,
            start_point,
            end_point,
            chunks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlockShape;

    fn small_config(chunk_count: usize) -> LevelConfig {
        LevelConfig {
            level: 3,
            depth_jitter: 0,
            chunk_count,
            block: BlockShape {
                rows: 4,
                cols: 4,
                random_delta: 0,
            },
            scale: 1.0,
            seed: 7,
            ..LevelConfig::default()
        }
    }

    #[test]
    fn same_seed_builds_identical_levels() {
        let assembler = LevelAssembler::new(LevelConfig {
            chunk_count: 4,
            seed: 1234,
            ..LevelConfig::default()
        })
        .unwrap();
        assert_eq!(
            assembler.build_seeded().unwrap(),
            assembler.build_seeded().unwrap()
        );
    }

    #[test]
    fn explicit_rng_matches_seeded_build() {
        let assembler = LevelAssembler::new(small_config(2)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(assembler.build(&mut rng).unwrap(), assembler.build_seeded().unwrap());
    }

    #[test]
    fn chunks_chain_end_to_start() {
        let scale = 1.0;
        let level = LevelAssembler::new(small_config(3))
            .unwrap()
            .build_seeded()
            .unwrap();

        assert_eq!(level.chunks.len(), 3);
        assert_eq!(level.chunks[0].offset, Vec2::ZERO);
        for pair in level.chunks.windows(2) {
            assert_eq!(pair[0].end_anchor, pair[1].offset);
        }
        for (i, span) in level.chunks.iter().enumerate() {
            let tiles = level.chunk_tiles(i);
            assert!(!tiles.is_empty());
            assert_eq!(tiles[0].kind, TileKind::Start);
            assert_eq!(tiles[0].position, span.offset * scale);
            if tiles.len() > 1 {
                let end = tiles.last().unwrap();
                assert_eq!(end.kind, TileKind::End);
                assert_eq!(end.position, span.end_anchor * scale);
            }
        }
    }

    #[test]
    fn anchors_and_bounds_cover_the_level() {
        let level = LevelAssembler::new(small_config(3))
            .unwrap()
            .build_seeded()
            .unwrap();

        assert_eq!(level.start_point, level.tiles[0].position);
        let last_end = level
            .tiles
            .iter()
            .rev()
            .find(|t| t.kind == TileKind::End)
            .map(|t| t.position)
            .unwrap_or(level.start_point);
        assert_eq!(level.end_point, last_end);

        let bounds = level.bounds.unwrap();
        let tight = Bounds2::from_points(level.tiles.iter().map(|t| t.position)).unwrap();
        assert_eq!(bounds, tight);
        assert_eq!(level.count_kind(TileKind::Start), 3);
    }

    #[test]
    fn tile_ranges_partition_tiles() {
        let level = LevelAssembler::new(small_config(4))
            .unwrap()
            .build_seeded()
            .unwrap();
        let mut next = 0;
        for span in &level.chunks {
            assert_eq!(span.tile_range.start, next);
            assert_eq!(span.tile_range.len(), span.path_len);
            next = span.tile_range.end;
        }
        assert_eq!(next, level.tile_count());
    }

    #[test]
    fn chunk_tiles_tolerates_inconsistent_ranges() {
        let mut level = LevelAssembler::new(small_config(2))
            .unwrap()
            .build_seeded()
            .unwrap();
        let len = level.tile_count();
        level.chunks[1].tile_range = len..len + 5;
        assert!(level.chunk_tiles(1).is_empty());
        assert!(level.chunk_tiles(9).is_empty());
        assert!(!level.chunk_tiles(0).is_empty());
    }

    #[test]
    fn jitter_stays_in_range() {
        let assembler = LevelAssembler::new(LevelConfig {
            level: 3,
            depth_jitter: 2,
            chunk_count: 12,
            seed: 5,
            ..LevelConfig::default()
        })
        .unwrap();
        let level = assembler.build_seeded().unwrap();
        for span in &level.chunks {
            assert!((3..=5).contains(&span.curve_level));
        }
    }

    #[test]
    fn oversized_block_aborts_build() {
        let assembler = LevelAssembler::new(LevelConfig {
            level: 2,
            depth_jitter: 0,
            block: BlockShape {
                rows: 5,
                cols: 2,
                random_delta: 0,
            },
            ..LevelConfig::default()
        })
        .unwrap();
        assert!(matches!(
            assembler.build_seeded(),
            Err(LevelError::BlockExceedsGrid { .. })
        ));
    }

    #[test]
    fn degenerate_chunks_still_consume_indices() {
        let assembler = LevelAssembler::new(LevelConfig {
            level: 3,
            depth_jitter: 0,
            chunk_count: 2,
            block: BlockShape {
                rows: 0,
                cols: 4,
                random_delta: 0,
            },
            ..LevelConfig::default()
        })
        .unwrap();
        let level = assembler.build_seeded().unwrap();
        assert!(level.tiles.is_empty());
        assert!(level.bounds.is_none());
        assert_eq!(level.chunks.len(), 2);
        assert_eq!(level.start_point, Vec2::ZERO);
        assert_eq!(level.end_point, Vec2::ZERO);
        assert!(level.framing_points(5.0).is_empty());
    }

    #[test]
    fn framing_points_pad_bounds() {
        let level = LevelAssembler::new(small_config(2))
            .unwrap()
            .build_seeded()
            .unwrap();
        let bounds = level.bounds.unwrap();
        let framed = Bounds2::from_points(level.framing_points(2.0)).unwrap();
        assert_eq!(framed.min, bounds.min - Vec2::splat(2.0));
        assert_eq!(framed.max, bounds.max + Vec2::splat(2.0));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let result = LevelAssembler::new(LevelConfig {
            chunk_count: 0,
            ..LevelConfig::default()
        });
        assert!(matches!(result, Err(LevelError::InvalidConfig(_))));
    }
}
