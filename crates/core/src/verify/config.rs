//! Configuration for relationship verification

use serde::{Deserialize, Serialize};

/// Configuration for the FK verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyConfig {
    /// Maximum number of orphaned values reported per relationship.
    pub max_orphan_samples: usize,

    /// Maximum number of matching values reported per relationship.
    pub max_match_samples: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_orphan_samples: 5,
            max_match_samples: 3,
        }
    }
}

impl VerifyConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> VerifyConfigBuilder {
        VerifyConfigBuilder::default()
    }
}

/// Builder for [`VerifyConfig`]
#[derive(Debug, Default)]
pub struct VerifyConfigBuilder {
    config: VerifyConfig,
}

impl VerifyConfigBuilder {
    /// Set the maximum number of reported orphan samples.
    pub fn max_orphan_samples(mut self, max: usize) -> Self {
        self.config.max_orphan_samples = max;
        self
    }

    /// Set the maximum number of reported match samples.
    pub fn max_match_samples(mut self, max: usize) -> Self {
        self.config.max_match_samples = max;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VerifyConfig {
        self.config
    }
}
