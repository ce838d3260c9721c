use super::QueryOptions;
use crate::errors::MatchResult;
use crate::matcher::{MatchOutcome, match_with_options};
use crate::pattern::Pattern;
use crate::value::Value;
use crate::walk::{FoundMatch, IgnoreEdge, collect_matches, replace_matches};

#[derive(Debug, Clone)]
pub struct Query {
    pattern: Pattern,
    options: QueryOptions,
}

impl Query {
    pub fn new<P: Into<Pattern>>(pattern: P) -> Self {
        Self {
            pattern: pattern.into(),
            options: QueryOptions::default(),
        }
    }

    pub fn with_options<P: Into<Pattern>>(pattern: P, options: QueryOptions) -> MatchResult<Self> {
        options.validate()?;
        Ok(Self {
            pattern: pattern.into(),
            options,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn matches(&self, value: &Value) -> MatchResult<MatchOutcome> {
        match_with_options(value, &self.pattern, &self.options)
    }

    pub fn is_match(&self, value: &Value) -> MatchResult<bool> {
        self.matches(value).map(|outcome| outcome.matched)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(root = root.kind()))]
    pub fn find_matches(
        &self,
        root: &Value,
        ignore: Option<&IgnoreEdge<'_>>,
    ) -> MatchResult<Vec<FoundMatch>> {
        let found = collect_matches(root, &self.pattern, &self.options, ignore)?;
        tracing::trace!(matches = found.len(), "collected matches");
        Ok(found)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(root = root.kind()))]
    pub fn rewrite(&self, root: &Value, ignore: Option<&IgnoreEdge<'_>>) -> MatchResult<Value> {
        replace_matches(root, &self.pattern, &self.options, ignore)
    }
}

pub fn find_matches(
    root: &Value,
    pattern: &Pattern,
    ignore: Option<&IgnoreEdge<'_>>,
) -> MatchResult<Vec<FoundMatch>> {
    collect_matches(root, pattern, &QueryOptions::default(), ignore)
}

/// A copy of `root` with every matched replacement spliced in. Returns the
/// original handle when nothing was replaced.
pub fn rewrite(
    root: &Value,
    pattern: &Pattern,
    ignore: Option<&IgnoreEdge<'_>>,
) -> MatchResult<Value> {
    replace_matches(root, pattern, &QueryOptions::default(), ignore)
}
