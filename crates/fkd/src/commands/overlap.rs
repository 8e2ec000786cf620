//! CLI command for value-overlap relationship discovery

use std::path::PathBuf;

use fk_discovery_core::{OverlapConfig, OverlapFinder, render_overlap_report};

use crate::commands::collections_from_documents;
use crate::error::CliError;
use crate::loader;

/// Arguments for the `overlap` command
pub struct OverlapArgs {
    /// Directory holding collection snapshot JSON files
    pub data_dir: PathBuf,
    /// Minimum intersection size for a candidate to be reported
    pub min_matches: usize,
    /// Maximum number of sample matches shown per candidate
    pub max_samples: usize,
    /// Emit candidates as JSON instead of the ranked report
    pub json: bool,
}

/// Handle the `overlap` command
pub fn handle_overlap(args: &OverlapArgs) -> Result<(), CliError> {
    let documents = loader::load_json_documents(&args.data_dir)?;
    let collections = collections_from_documents(&documents);

    eprintln!("Loaded {} collections.", collections.len());

    let config = OverlapConfig::builder()
        .min_matches(args.min_matches)
        .max_sample_matches(args.max_samples)
        .build();
    let candidates = OverlapFinder::with_config(config)
        .find(&collections)
        .map_err(|e| CliError::Analysis(e.to_string()))?;

    if candidates.is_empty() {
        eprintln!("No candidate foreign-key relationships were detected by heuristics.");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        println!("Candidate foreign-key relationships:\n");
        print!("{}", render_overlap_report(&candidates));
    }
    Ok(())
}
