//! Natural-language query interpreter

use crate::error::{Error, Result};
use crate::filter::FilterSet;
use crate::query::rules::{default_rules, QueryRule};
use crate::strings::types::InterpretedQuery;

/// Turns free text into a [`FilterSet`] by running an ordered rule table
pub struct QueryInterpreter {
    rules: Vec<Box<dyn QueryRule>>,
}

impl QueryInterpreter {
    /// Interpreter with the built-in rule table
    pub fn new() -> Result<Self> {
        Ok(Self::with_rules(default_rules()?))
    }

    /// Interpreter with a caller-supplied rule table
    pub fn with_rules(rules: Vec<Box<dyn QueryRule>>) -> Self {
        Self { rules }
    }

    /// Names of the active rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule over the lowercased query.
    ///
    /// Fails only when a rule cannot turn its match into a value.
    pub fn parse(&self, query: &str) -> Result<FilterSet> {
        let text = query.to_lowercase();
        let mut filters = FilterSet::default();
        for rule in &self.rules {
            rule.apply(&text, &mut filters)?;
        }
        Ok(filters)
    }

    /// Parse and check that the result is usable.
    ///
    /// A blank query, a query no rule understood, and a query whose length
    /// bounds exclude each other are all rejected, each with its own error.
    pub fn interpret(&self, query: &str) -> Result<InterpretedQuery> {
        if query.trim().is_empty() {
            return Err(Error::MissingQuery);
        }

        let parsed_filters = self.parse(query)?;
        tracing::debug!(query = %query, filters = ?parsed_filters, "Interpreted query");

        if parsed_filters.is_empty() {
            return Err(Error::UnparseableQuery(
                "no recognizable filter in query".to_string(),
            ));
        }
        if let Some((min_length, max_length)) = parsed_filters.conflict() {
            return Err(Error::ConflictingFilters {
                min_length,
                max_length,
            });
        }

        Ok(InterpretedQuery {
            original: query.to_string(),
            parsed_filters,
        })
    }
}
