//! Configuration types for FilterResolver

use crate::error::{FilterError, Result};
use filterql_parser::{DslParser, DEFAULT_MAX_LENGTH};
use serde::{Deserialize, Serialize};

/// Resolver configuration
///
/// ```yaml
/// max_expression_length: 1024
/// unused_filters: reject
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Longest accepted `combineWith` expression, in characters
    pub max_expression_length: usize,

    /// What to do with filters the expression never references
    pub unused_filters: UnusedFilterPolicy,
}

impl ResolverConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            max_expression_length: DEFAULT_MAX_LENGTH,
            unused_filters: UnusedFilterPolicy::default(),
        }
    }

    /// Set the maximum expression length
    pub fn with_max_expression_length(mut self, max: usize) -> Self {
        self.max_expression_length = max;
        self
    }

    /// Set the unused filter policy
    pub fn with_unused_filters(mut self, policy: UnusedFilterPolicy) -> Self {
        self.unused_filters = policy;
        self
    }

    /// Load from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| FilterError::Config(format!("Invalid resolver config: {}", e)))
    }

    /// Load from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FilterError::Config(format!("Invalid resolver config: {}", e)))
    }

    /// The DSL parser these settings describe
    pub fn parser(&self) -> DslParser {
        DslParser::new().with_max_length(self.max_expression_length)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Policy for filters defined in a request but absent from its expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnusedFilterPolicy {
    /// Accept silently
    Ignore,
    /// Accept and log a warning
    #[default]
    Warn,
    /// Fail with `FilterError::UnusedFilters`
    Reject,
}
