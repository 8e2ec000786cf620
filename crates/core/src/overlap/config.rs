//! Configuration for value-overlap discovery

use serde::{Deserialize, Serialize};

/// Configuration for the value-overlap finder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapConfig {
    /// Minimum intersection size for a candidate to be emitted.
    pub min_matches: usize,

    /// Maximum number of example matching values carried per candidate.
    pub max_sample_matches: usize,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            min_matches: 1,
            max_sample_matches: 5,
        }
    }
}

impl OverlapConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> OverlapConfigBuilder {
        OverlapConfigBuilder::default()
    }
}

/// Builder for [`OverlapConfig`]
#[derive(Debug, Default)]
pub struct OverlapConfigBuilder {
    config: OverlapConfig,
}

impl OverlapConfigBuilder {
    /// Set the minimum intersection size (at least 1).
    pub fn min_matches(mut self, min: usize) -> Self {
        self.config.min_matches = min.max(1);
        self
    }

    /// Set the maximum number of sample matches per candidate.
    pub fn max_sample_matches(mut self, max: usize) -> Self {
        self.config.max_sample_matches = max;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OverlapConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OverlapConfig::default();
        assert_eq!(config.min_matches, 1);
        assert_eq!(config.max_sample_matches, 5);
    }

    #[test]
    fn test_builder_clamps_min_matches() {
        let config = OverlapConfig::builder()
            .min_matches(0)
            .max_sample_matches(2)
            .build();
        assert_eq!(config.min_matches, 1);
        assert_eq!(config.max_sample_matches, 2);
    }
}
