use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a map pattern treats an `optional` field whose key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OptionalFieldMode {
    /// The whole enclosing map matches, with no captures, and the remaining
    /// fields are not checked.
    #[default]
    ShortCircuit,
    /// Only that field is skipped; the remaining fields still apply.
    SkipField,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct QueryOptions {
    pub optional_fields: OptionalFieldMode,
    /// Deepest level the traversal visits; the root is level 1.
    pub max_depth: Option<usize>,
}

impl QueryOptions {
    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), QueryOptionsError> {
        if self.max_depth == Some(0) {
            return Err(QueryOptionsError::MaxDepthInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct QueryOptionsBuilder {
    options: QueryOptions,
}

impl QueryOptionsBuilder {
    pub fn optional_fields(mut self, mode: OptionalFieldMode) -> Self {
        self.options.optional_fields = mode;
        self
    }

    pub fn max_depth(mut self, value: usize) -> Self {
        self.options.max_depth = Some(value);
        self
    }

    pub fn unbounded_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }

    pub fn build(self) -> Result<QueryOptions, QueryOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryOptionsError {
    #[error("max_depth must be at least 1 (got {provided})")]
    MaxDepthInvalid { provided: usize },
}
