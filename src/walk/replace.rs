use super::{IgnoreEdge, Visit, Walker};
use crate::errors::MatchResult;
use crate::matcher::match_with_options;
use crate::pattern::Pattern;
use crate::query::QueryOptions;
use crate::value::Value;

pub(crate) fn replace_matches(
    root: &Value,
    pattern: &Pattern,
    options: &QueryOptions,
    ignore: Option<&IgnoreEdge<'_>>,
) -> MatchResult<Value> {
    Walker::new(ignore)
        .with_max_depth(options.max_depth)
        .walk(root, |node| {
            let outcome = match_with_options(node, pattern, options)?;
            Ok(match outcome.replacement {
                Some(replacement) if outcome.matched => Visit::Replace(replacement),
                _ => Visit::Descend,
            })
        })
}
