//! Mountsmith — batch build CLI for the OpenSCAD mounting-component library.
//!
//! # Usage
//!
//! ```text
//! mountsmith build [--root <dir>]
//! mountsmith check
//! ```
//!
//! `build` runs the full pipeline: renderer availability check, clean BOSL
//! fetch, config load, customiser generation, output-tree reset, and one
//! render per configured stem and connection block. Exit status is 0 only
//! when every stage and every render succeeded.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, check::CheckArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "mountsmith",
    version,
    about = "Batch-render mounting-component variants with OpenSCAD",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full build pipeline and render every configured item.
    Build(BuildArgs),

    /// Verify the external renderer is available on PATH.
    Check(CheckArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
