//! CLI command for verifying known FK relationships against record data

use std::path::PathBuf;

use fk_discovery_core::{FkCheck, FkVerifier, render_verification_report};

use crate::commands::collections_from_documents;
use crate::error::CliError;
use crate::loader;

/// Arguments for the `verify` command
pub struct VerifyArgs {
    /// Directory holding collection snapshot JSON files
    pub data_dir: PathBuf,
    /// JSON file with an array of `{source, field, target}` checks
    pub checks: PathBuf,
    /// Emit outcomes as JSON instead of the report
    pub json: bool,
}

/// Handle the `verify` command
pub fn handle_verify(args: &VerifyArgs) -> Result<(), CliError> {
    let checks_text = std::fs::read_to_string(&args.checks)?;
    let checks: Vec<FkCheck> = serde_json::from_str(&checks_text)?;
    if checks.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "no checks defined in {}",
            args.checks.display()
        )));
    }

    let documents = loader::load_json_documents(&args.data_dir)?;
    let collections = collections_from_documents(&documents);

    eprintln!("Collection sizes:");
    for (name, collection) in collections.iter() {
        eprintln!(
            "  {name}: {} records, {} unique IDs",
            collection.len(),
            collection.identifier_set().len()
        );
    }
    eprintln!();

    let reports = FkVerifier::new()
        .verify_all(&collections, &checks)
        .map_err(|e| CliError::Analysis(e.to_string()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("FK Relationship Verification:\n");
        print!("{}", render_verification_report(&reports));
    }
    Ok(())
}
