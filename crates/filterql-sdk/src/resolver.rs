//! Filter resolver
//!
//! Turns a filter request into one combined condition:
//!
//! 1. parse `combine_with` into a [`FilterTree`]
//! 2. apply the unused filter policy
//! 3. validate every definition, then build its leaf condition into a context
//! 4. generate the combined condition from the tree and the context
//!
//! The builder is only called once the expression and every definition are
//! known to be valid.
//!
//! A resolver holds no per-request state and can be shared across threads.

use crate::config::{ResolverConfig, UnusedFilterPolicy};
use crate::error::{FilterError, Result};
use crate::executor::FilterExecutor;
use filterql_core::{
    ConditionBuilder, FilterContext, FilterRequest, Property, PropertyRef, PropertyRegistry,
    RawFilterRequest,
};
use filterql_parser::{DslParser, FilterTree, Parser};

/// Resolves filter requests into conditions
#[derive(Debug, Clone)]
pub struct FilterResolver<Pa: Parser = DslParser> {
    parser: Pa,
    unused_filters: UnusedFilterPolicy,
}

impl FilterResolver<DslParser> {
    /// Create a resolver with default settings
    pub fn new() -> Self {
        Self::from_config(&ResolverConfig::default())
    }

    /// Create a resolver from configuration
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            parser: config.parser(),
            unused_filters: config.unused_filters,
        }
    }
}

impl Default for FilterResolver<DslParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Pa: Parser> FilterResolver<Pa> {
    /// Create a resolver around a custom parser
    pub fn with_parser(parser: Pa, unused_filters: UnusedFilterPolicy) -> Self {
        Self {
            parser,
            unused_filters,
        }
    }

    /// Replace the parser, keeping the other settings
    pub fn replace_parser<Q: Parser>(self, parser: Q) -> FilterResolver<Q> {
        FilterResolver {
            parser,
            unused_filters: self.unused_filters,
        }
    }

    pub fn parser(&self) -> &Pa {
        &self.parser
    }

    pub fn unused_filters(&self) -> UnusedFilterPolicy {
        self.unused_filters
    }

    /// Parse an expression with this resolver's parser
    pub fn parse(&self, expression: &str) -> Result<FilterTree> {
        Ok(self.parser.parse(expression)?)
    }

    /// Resolve `request` into a single condition built by `builder`
    pub fn resolve<P, B>(&self, request: &FilterRequest<P>, builder: B) -> Result<B::Condition>
    where
        P: PropertyRef,
        B: ConditionBuilder<P>,
    {
        let mut context = FilterContext::new(builder);
        self.resolve_in(request, &mut context)
    }

    /// Resolve `request` using an existing context.
    ///
    /// The request's filters are added to `context`, replacing entries with
    /// the same names. Entries already in the context stay available to the
    /// expression. On a syntax or validation error the context is left as it
    /// was.
    pub fn resolve_in<P, B>(
        &self,
        request: &FilterRequest<P>,
        context: &mut FilterContext<P, B>,
    ) -> Result<B::Condition>
    where
        P: PropertyRef,
        B: ConditionBuilder<P>,
    {
        let tree = self.parse(request.combine_with())?;
        self.check_unused(request, &tree)?;

        let names = request.names();
        for name in &names {
            request.filters()[*name].validate()?;
        }
        for name in names {
            context.add_condition(name, &request.filters()[name])?;
        }

        let condition = tree.generate(&*context)?;
        tracing::debug!(
            "Resolved {} filter(s) with expression {}",
            request.filters().len(),
            tree
        );
        Ok(condition)
    }

    /// Resolve a wire request, looking properties up in `registry`
    pub fn resolve_raw<B>(
        &self,
        request: &RawFilterRequest,
        registry: &PropertyRegistry,
        builder: B,
    ) -> Result<B::Condition>
    where
        B: ConditionBuilder<Property>,
    {
        let request = request.resolve(registry)?;
        self.resolve(&request, builder)
    }

    /// Resolve `request` and hand the condition to `executor`
    pub fn execute<P, B, E>(
        &self,
        request: &FilterRequest<P>,
        builder: B,
        executor: &E,
    ) -> Result<E::Output>
    where
        P: PropertyRef,
        B: ConditionBuilder<P>,
        E: FilterExecutor<B::Condition>,
    {
        let condition = self.resolve(request, builder)?;
        Ok(executor.execute(condition))
    }

    fn check_unused<P: PropertyRef>(&self, request: &FilterRequest<P>, tree: &FilterTree) -> Result<()> {
        if self.unused_filters == UnusedFilterPolicy::Ignore {
            return Ok(());
        }

        let referenced = tree.identifiers();
        let unused: Vec<String> = request
            .names()
            .into_iter()
            .filter(|name| !referenced.contains(name))
            .map(str::to_string)
            .collect();
        if unused.is_empty() {
            return Ok(());
        }

        match self.unused_filters {
            UnusedFilterPolicy::Reject => Err(FilterError::UnusedFilters(unused)),
            _ => {
                tracing::warn!(
                    "Filters not referenced by '{}': {}",
                    request.combine_with(),
                    unused.join(", ")
                );
                Ok(())
            }
        }
    }
}
