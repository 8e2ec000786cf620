//! fkd - foreign-key discovery CLI
//!
//! Runs the discovery engine over already-materialized JSON snapshots: the
//! files a fetch layer saved to disk, one per schema document or record
//! collection.

mod commands;
mod error;
mod loader;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::analyze::{AnalyzeArgs, handle_analyze};
use commands::overlap::{OverlapArgs, handle_overlap};
use commands::verify::{VerifyArgs, handle_verify};

#[derive(Parser)]
#[command(
    name = "fkd",
    version,
    about = "Infer and verify foreign-key relationships from JSON data snapshots"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Infer FK candidates from schema documents and API path templates
    Analyze {
        /// Directory holding OpenAPI-style JSON documents
        data_dir: PathBuf,
        /// Emit candidates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Discover relationships from value overlap between collections
    Overlap {
        /// Directory holding collection snapshot JSON files
        data_dir: PathBuf,
        /// Minimum intersection size for a candidate to be reported
        #[arg(long, default_value_t = 1)]
        min_matches: usize,
        /// Maximum number of sample matches shown per candidate
        #[arg(long, default_value_t = 5)]
        max_samples: usize,
        /// Emit candidates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify known FK relationships against record data
    Verify {
        /// Directory holding collection snapshot JSON files
        data_dir: PathBuf,
        /// JSON file with an array of `{source, field, target}` checks
        #[arg(long)]
        checks: PathBuf,
        /// Emit outcomes as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Analyze { data_dir, json } => handle_analyze(&AnalyzeArgs { data_dir, json })?,
        Command::Overlap {
            data_dir,
            min_matches,
            max_samples,
            json,
        } => handle_overlap(&OverlapArgs {
            data_dir,
            min_matches,
            max_samples,
            json,
        })?,
        Command::Verify {
            data_dir,
            checks,
            json,
        } => handle_verify(&VerifyArgs {
            data_dir,
            checks,
            json,
        })?,
    }
    Ok(())
}
