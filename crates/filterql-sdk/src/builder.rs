//! Builder pattern for FilterResolver

use crate::config::{ResolverConfig, UnusedFilterPolicy};
use crate::error::Result;
use crate::resolver::FilterResolver;
use filterql_parser::{DslParser, Parser};

/// Builder for FilterResolver
///
/// # Example
///
/// ```rust,ignore
/// use filterql_sdk::{FilterResolverBuilder, UnusedFilterPolicy};
///
/// // From code
/// let resolver = FilterResolverBuilder::new()
///     .max_expression_length(1024)
///     .unused_filters(UnusedFilterPolicy::Reject)
///     .build();
///
/// // From a YAML settings file
/// let resolver = FilterResolverBuilder::new()
///     .with_yaml_config(&std::fs::read_to_string("filterql.yaml")?)?
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterResolverBuilder {
    config: ResolverConfig,
}

impl FilterResolverBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the configuration with one loaded from YAML
    pub fn with_yaml_config(self, yaml: &str) -> Result<Self> {
        Ok(self.with_config(ResolverConfig::from_yaml_str(yaml)?))
    }

    /// Set the maximum expression length
    pub fn max_expression_length(mut self, max: usize) -> Self {
        self.config.max_expression_length = max;
        self
    }

    /// Set the unused filter policy
    pub fn unused_filters(mut self, policy: UnusedFilterPolicy) -> Self {
        self.config.unused_filters = policy;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Build a resolver with the DSL parser
    pub fn build(self) -> FilterResolver<DslParser> {
        tracing::debug!(
            "Building filter resolver: max_expression_length={}, unused_filters={:?}",
            self.config.max_expression_length,
            self.config.unused_filters
        );
        FilterResolver::from_config(&self.config)
    }

    /// Build a resolver around a custom parser.
    ///
    /// `max_expression_length` only applies to the DSL parser and is ignored.
    pub fn build_with_parser<Pa: Parser>(self, parser: Pa) -> FilterResolver<Pa> {
        FilterResolver::with_parser(parser, self.config.unused_filters)
    }
}
