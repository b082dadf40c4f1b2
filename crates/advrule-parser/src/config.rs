//! Parser configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default limit on rule nesting
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Rule parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of nested document levels.
    ///
    /// A top-level document is level 1 and every combinator adds a level.
    /// Deeper documents are rejected.
    pub max_depth: usize,

    /// Reject documents carrying more than one key at any level.
    ///
    /// When false only the first key of a document is read and the rest
    /// are ignored.
    pub reject_extra_keys: bool,
}

impl ParserConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_extra_keys: false,
        }
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether multi-key documents are rejected
    pub fn reject_extra_keys(mut self, reject: bool) -> Self {
        self.reject_extra_keys = reject;
        self
    }

    /// Load a configuration from YAML; missing fields keep their defaults
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Load a configuration from JSON; missing fields keep their defaults
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
