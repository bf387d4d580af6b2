//! Building CLI - writes a tapered prism mesh as OBJ text to stdout
//!
//! # Usage
//!
//! ```bash
//! # Defaults: 8 sides, height 6, base radius 1, top radius 0.8
//! building > building.obj
//!
//! # Square tower, height 2, straight walls
//! building 4 2 1 1 > tower.obj
//!
//! # Show builder diagnostics on stderr
//! building 12 10 2 0.5 --verbose
//! ```
//!
//! Arguments that are missing or not numbers fall back to the defaults, and
//! the side count is clamped to 3..=36.

use anyhow::{Context, Result};
use building_mesh::{generate, obj::write_obj, RawShapeParams};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Generate a tapered N-sided building as OBJ
#[derive(Parser, Debug)]
#[command(name = "building")]
#[command(about = "Generate a tapered N-sided building mesh as OBJ text")]
#[command(version)]
struct Cli {
    /// Number of sides (clamped to 3..=36, default 8)
    sides: Option<String>,

    /// Height of the building (default 6)
    height: Option<String>,

    /// Radius of the bottom rim (default 1)
    base_radius: Option<String>,

    /// Radius of the top rim (default 0.8)
    top_radius: Option<String>,

    /// Log builder diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn raw_params(&self) -> RawShapeParams {
        RawShapeParams::from_args(
            [&self.sides, &self.height, &self.base_radius, &self.top_radius]
                .into_iter()
                // Keep positions: a missing slot must not shift later ones
                .map(|arg| arg.as_deref().unwrap_or("")),
        )
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let raw = cli.raw_params();
    debug!(?raw, "parsed arguments");

    let (params, mesh) = generate(&raw);
    info!(
        sides = params.sides,
        height = params.height,
        base_radius = params.base_radius,
        top_radius = params.top_radius,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated building"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_obj(&mut out, &mesh, &params).context("failed to write OBJ to stdout")?;
    // Trailing blank line after the mesh, as console output always had
    writeln!(out).context("failed to write OBJ to stdout")?;

    Ok(())
}
