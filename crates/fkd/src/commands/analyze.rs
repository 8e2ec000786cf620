//! CLI command for naming/path FK candidate analysis

use std::path::PathBuf;

use fk_discovery_core::{
    PathRelationships, SchemaSet, find_candidates, merge_path_relationships, paths_from_document,
    render_candidate_report,
};

use crate::error::CliError;
use crate::loader;

/// Arguments for the `analyze` command
pub struct AnalyzeArgs {
    /// Directory holding OpenAPI-style JSON documents
    pub data_dir: PathBuf,
    /// Emit candidates as JSON instead of the grouped report
    pub json: bool,
}

/// Handle the `analyze` command
pub fn handle_analyze(args: &AnalyzeArgs) -> Result<(), CliError> {
    let documents = loader::load_json_documents(&args.data_dir)?;

    let mut schemas = SchemaSet::new();
    let mut paths = PathRelationships::new();
    for (_, doc) in &documents {
        schemas.merge_document(doc);
        merge_path_relationships(&mut paths, paths_from_document(doc));
    }

    eprintln!("Found {} schemas.", schemas.len());
    if !paths.is_empty() {
        eprintln!("Found API relationship paths for {} schemas.", paths.len());
    }

    let candidates =
        find_candidates(&schemas, &paths).map_err(|e| CliError::Analysis(e.to_string()))?;
    if candidates.is_empty() {
        eprintln!("No candidate FK fields or relationships found.");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        println!("Listing candidate foreign keys and relationships...\n");
        print!("{}", render_candidate_report(&candidates));
    }
    Ok(())
}
