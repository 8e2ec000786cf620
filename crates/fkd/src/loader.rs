//! Loading of JSON snapshot files from a data directory
//!
//! Snapshots are whatever the fetch layer wrote to disk: OpenAPI-style
//! documents for `analyze`, record arrays for `overlap`/`verify`. Files are
//! keyed by file stem and loaded in sorted filename order; unreadable or
//! unparseable files are logged and skipped.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CliError;

/// Read every `*.json` document in a directory.
pub fn load_json_documents(dir: &Path) -> Result<Vec<(String, Value)>, CliError> {
    if !dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                continue;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => {
                debug!("loaded {}", path.display());
                documents.push((name.to_string(), value));
            }
            Err(err) => warn!("skipping {}: {err}", path.display()),
        }
    }
    Ok(documents)
}
