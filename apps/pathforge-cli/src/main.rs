use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pathforge_camera::FramingCamera;
use pathforge_common::Direction;
use pathforge_input::Action;
use pathforge_level::{path_markers, LevelConfig, LevelSession, MarkerKind, Viewport};
use pathforge_render::{AsciiRenderer, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pathforge-cli", about = "Hilbert-curve level generator")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Generate a single Hilbert curve
    Curve {
        /// Recursion depth
        #[arg(short, long, default_value = "2")]
        level: u32,
        /// Distance between adjacent points
        #[arg(short, long, default_value = "1.0")]
        cell_size: f32,
        /// Print the curve as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a level of chained chunks
    Build {
        /// YAML or JSON level config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// RNG seed, overrides the config
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of chunks, overrides the config
        #[arg(long)]
        chunks: Option<usize>,
        /// Base curve depth, overrides the config
        #[arg(short, long)]
        level: Option<u32>,
        /// Print the level descriptor as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move a viewport over a curve and print the traced path
    Viewport {
        /// Curve depth
        #[arg(short, long, default_value = "3")]
        level: u32,
        #[arg(long, default_value = "4")]
        rows: i32,
        #[arg(long, default_value = "4")]
        cols: i32,
        /// Key presses to apply, e.g. "ddw" (w/a/s/d move)
        #[arg(short, long, default_value = "")]
        moves: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("pathforge-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("curve: {}", pathforge_curve::crate_info());
            println!("level: {}", pathforge_level::crate_info());
            println!("camera: {}", pathforge_camera::crate_info());
            println!("render: {}", pathforge_render::crate_info());
            println!("input: {}", pathforge_input::crate_info());
            println!("max curve level: {}", pathforge_curve::MAX_LEVEL);
        }
        Commands::Curve {
            level,
            cell_size,
            json,
        } => {
            let curve = pathforge_curve::generate(level, cell_size)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&curve)?);
            } else {
                println!(
                    "Curve: level={}, grid={}x{}, points={}",
                    curve.level(),
                    curve.grid_size(),
                    curve.grid_size(),
                    curve.len()
                );
                for p in &curve {
                    println!(
                        "  #{:<5} cell=({}, {}) pos=({:.2}, {:.2}) rot={}",
                        p.index, p.cell.x, p.cell.y, p.from.x, p.from.y, p.rotation
                    );
                }
            }
        }
        Commands::Build {
            config,
            seed,
            chunks,
            level,
            json,
        } => {
            let mut cfg = match config {
                Some(path) => LevelConfig::load(&path)?,
                None => LevelConfig::default(),
            };
            if let Some(seed) = seed {
                cfg.seed = seed;
            }
            if let Some(chunks) = chunks {
                cfg.chunk_count = chunks;
            }
            if let Some(level) = level {
                cfg.level = level;
            }

            let mut session = LevelSession::new(cfg.clone())?;
            let descriptor = session.regenerate()?;

            if json {
                println!("{}", serde_json::to_string_pretty(descriptor)?);
            } else {
                let mut camera = FramingCamera::with_zoom_limiter(cfg.zoom_limiter);
                camera.recalculate(&descriptor.framing_points(cfg.margin));
                print!("{}", AsciiRenderer::new(cfg.scale).render(descriptor, &camera));
                for span in &descriptor.chunks {
                    println!(
                        "chunk {}: level={} region={} path={} offset=({}, {})",
                        span.index,
                        span.curve_level,
                        span.region_cells,
                        span.path_len,
                        span.offset.x,
                        span.offset.y
                    );
                }
            }
        }
        Commands::Viewport {
            level,
            rows,
            cols,
            moves,
        } => {
            let curve = pathforge_curve::generate(level, 1.0)?;
            let mut viewport = Viewport::new(curve.grid_size(), rows, cols)?;

            for direction in apply_moves(&mut viewport, &moves) {
                println!("move {direction:?} blocked at edge");
            }

            let origin = viewport.origin();
            let path = viewport.trace(&curve);
            println!(
                "Viewport: origin=({}, {}) size={rows}x{cols}, path={} points",
                origin.x,
                origin.y,
                path.len()
            );
            for marker in path_markers(&path) {
                let glyph = match marker.kind {
                    MarkerKind::Start => "start",
                    MarkerKind::End => "end",
                    MarkerKind::Arrow => "arrow",
                };
                println!(
                    "  {glyph:<5} ({}, {}) rot={}",
                    marker.position.x, marker.position.y, marker.rotation
                );
            }
        }
    }

    Ok(())
}

/// Apply the viewport bindings in `keys` and return the moves refused at the
/// grid edge. The curve is fixed by its level, so `Regenerate` and unbound
/// keys leave the viewport alone.
fn apply_moves(viewport: &mut Viewport, keys: &str) -> Vec<Direction> {
    let mut blocked = Vec::new();
    for action in Action::parse_sequence(keys) {
        match action {
            Action::Shift(direction) => {
                if !viewport.shift(direction) {
                    blocked.push(direction);
                }
            }
            Action::Regenerate | Action::Noop => {
                tracing::debug!(?action, "ignored in viewport mode");
            }
        }
    }
    blocked
}
