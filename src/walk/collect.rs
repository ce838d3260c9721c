use super::{IgnoreEdge, Visit, Walker};
use crate::capture::CaptureBag;
use crate::errors::MatchResult;
use crate::matcher::match_with_options;
use crate::pattern::Pattern;
use crate::query::QueryOptions;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct FoundMatch {
    pub node: Value,
    pub captures: CaptureBag,
    pub replacement: Option<Value>,
}

// Matching never stops descent here: a node and its descendants can all
// appear in the output.
pub(crate) fn collect_matches(
    root: &Value,
    pattern: &Pattern,
    options: &QueryOptions,
    ignore: Option<&IgnoreEdge<'_>>,
) -> MatchResult<Vec<FoundMatch>> {
    let mut found = Vec::new();

    Walker::new(ignore)
        .with_max_depth(options.max_depth)
        .walk(root, |node| {
            let outcome = match_with_options(node, pattern, options)?;
            if outcome.matched {
                found.push(FoundMatch {
                    node: node.clone(),
                    captures: outcome.captures,
                    replacement: outcome.replacement,
                });
            }
            Ok(Visit::Descend)
        })?;

    Ok(found)
}
