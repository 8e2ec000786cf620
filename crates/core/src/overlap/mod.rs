//! Value-overlap relationship pipeline
//!
//! Data-driven counterpart to the naming/path pipeline: instead of reading
//! declared schemas, it intersects the actual values of every candidate
//! field with every other collection's identifier set. Heterogeneous value
//! types are handled by canonical stringification, so a numeric identifier
//! on one side matches its string form on the other.
//!
//! # Example
//!
//! ```rust,ignore
//! use fk_discovery_core::model::{Collection, CollectionSet};
//! use fk_discovery_core::overlap::OverlapFinder;
//!
//! let mut collections = CollectionSet::new();
//! collections.insert("Asset", Collection::new(asset_records));
//! collections.insert("Buildings", Collection::new(building_records));
//!
//! let candidates = OverlapFinder::new().find(&collections)?;
//! for c in &candidates {
//!     println!("{}.{} -> {} ({} matches)", c.from, c.field, c.to, c.match_count);
//! }
//! ```

mod config;
mod finder;
mod types;

pub use config::{OverlapConfig, OverlapConfigBuilder};
pub use finder::OverlapFinder;
pub use types::OverlapCandidate;

use crate::error::DiscoveryError;
use crate::model::CollectionSet;

/// Run value-overlap discovery with default configuration.
pub fn find_value_overlaps(
    collections: &CollectionSet,
) -> Result<Vec<OverlapCandidate>, DiscoveryError> {
    OverlapFinder::new().find(collections)
}
