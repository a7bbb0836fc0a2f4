// Desktop/tooling crate: unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod geometry;
mod presets;
mod replay;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Draw-call coverage tooling", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompute per-cycle coverage from a captured trace log
    /// (`full_ops.txt` or a single `flush-<i>.txt`)
    Replay {
        /// Trace log to replay
        log: std::path::PathBuf,
        #[command(flatten)]
        display: geometry::DisplayArgs,
        /// Print one JSON object per cycle instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List built-in display presets and their drawable areas
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { log, display, json } => replay::run(&log, &display, json),
        Commands::Presets { json } => presets::run(json),
    }
}
