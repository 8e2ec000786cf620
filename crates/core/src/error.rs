//! Error types for the discovery engine

use thiserror::Error;

/// Errors that can occur while preparing or running a discovery pass.
///
/// Malformed documents are tolerated (they contribute nothing and are
/// logged); errors are reserved for unusable input as a whole.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// No schemas available to analyze
    #[error("no schemas found to analyze")]
    NoSchemas,

    /// No collections available to analyze
    #[error("no collections found to analyze")]
    NoCollections,
}
