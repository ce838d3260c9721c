use super::{MatchContext, MatchOutcome};
use crate::capture::CaptureBag;
use crate::errors::MatchResult;
use crate::pattern::Pattern;
use crate::query::{OptionalFieldMode, QueryOptions};
use crate::types::MapKey;
use crate::value::{List, Map, Value};
use smallvec::SmallVec;

type ReplacedFields = SmallVec<[(MapKey, Value); 4]>;
type ReplacedItems = SmallVec<[(usize, Value); 4]>;

pub fn match_and_capture(value: &Value, pattern: &Pattern) -> MatchResult<MatchOutcome> {
    match_with_options(value, pattern, &QueryOptions::default())
}

pub fn match_with_options(
    value: &Value,
    pattern: &Pattern,
    options: &QueryOptions,
) -> MatchResult<MatchOutcome> {
    let mut cx = MatchContext::new(options);
    match_node(&mut cx, value, pattern)
}

pub fn is_match(value: &Value, pattern: &Pattern) -> MatchResult<bool> {
    match_and_capture(value, pattern).map(|outcome| outcome.matched)
}

pub(crate) fn match_node(
    cx: &mut MatchContext<'_>,
    value: &Value,
    pattern: &Pattern,
) -> MatchResult<MatchOutcome> {
    match pattern {
        Pattern::Predicate(predicate) => predicate.matches(cx, value),
        Pattern::Map(fields) => match value {
            Value::Map(map) => match_map(cx, map, fields),
            _ => Ok(MatchOutcome::miss()),
        },
        Pattern::List(items) => match value {
            Value::List(list) => match_list(cx, list, items),
            _ => Ok(MatchOutcome::miss()),
        },
        Pattern::Literal(literal) => Ok(MatchOutcome::verdict(value.strict_eq(literal))),
    }
}

fn match_map(
    cx: &mut MatchContext<'_>,
    map: &Map,
    fields: &[(MapKey, Pattern)],
) -> MatchResult<MatchOutcome> {
    if !cx.enter(map.id()) {
        tracing::trace!(node = map.id(), "map re-entered on current path; treating as mismatch");
        return Ok(MatchOutcome::miss());
    }

    let outcome = match_fields(cx, map, fields);
    cx.leave(map.id());
    outcome
}

fn match_fields(
    cx: &mut MatchContext<'_>,
    map: &Map,
    fields: &[(MapKey, Pattern)],
) -> MatchResult<MatchOutcome> {
    let mut captures = CaptureBag::new();
    let mut replaced = ReplacedFields::new();

    for (key, pattern) in fields {
        let Some(child) = map.get(key) else {
            if pattern.is_optional() {
                match cx.options().optional_fields {
                    // an absent optional key accepts the whole map as-is
                    OptionalFieldMode::ShortCircuit => {
                        return Ok(MatchOutcome::hit(CaptureBag::new()));
                    }
                    OptionalFieldMode::SkipField => continue,
                }
            }
            return Ok(MatchOutcome::miss());
        };

        let outcome = match_node(cx, &child, pattern)?;
        if !outcome.matched {
            return Ok(MatchOutcome::miss());
        }

        captures = captures.merge(outcome.captures);
        if let Some(replacement) = outcome.replacement {
            replaced.push((key.clone(), replacement));
        }
    }

    let replacement = (!replaced.is_empty()).then(|| Value::Map(map.with_replaced(&replaced)));
    Ok(MatchOutcome::hit(captures).with_replacement(replacement))
}

fn match_list(
    cx: &mut MatchContext<'_>,
    list: &List,
    patterns: &[Pattern],
) -> MatchResult<MatchOutcome> {
    if list.len() != patterns.len() {
        return Ok(MatchOutcome::miss());
    }

    if !cx.enter(list.id()) {
        tracing::trace!(node = list.id(), "list re-entered on current path; treating as mismatch");
        return Ok(MatchOutcome::miss());
    }

    let outcome = match_items(cx, list, patterns);
    cx.leave(list.id());
    outcome
}

fn match_items(
    cx: &mut MatchContext<'_>,
    list: &List,
    patterns: &[Pattern],
) -> MatchResult<MatchOutcome> {
    let mut captures = CaptureBag::new();
    let mut replaced = ReplacedItems::new();

    for (index, (item, pattern)) in list.items().iter().zip(patterns).enumerate() {
        let outcome = match_node(cx, item, pattern)?;
        if !outcome.matched {
            return Ok(MatchOutcome::miss());
        }

        captures = captures.merge(outcome.captures);
        if let Some(replacement) = outcome.replacement {
            replaced.push((index, replacement));
        }
    }

    let replacement = (!replaced.is_empty()).then(|| Value::List(list.with_replaced(&replaced)));
    Ok(MatchOutcome::hit(captures).with_replacement(replacement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{any, group, optional, string};
    use serde_json::json;

    fn matches(value: serde_json::Value, pattern: Pattern) -> bool {
        is_match(&Value::from(value), &pattern).expect("matching should not fail")
    }

    #[test]
    fn map_pattern_ignores_extra_keys() {
        let value = json!({ "kind": "test", "otherField": 123, "hidden": 3 });
        assert!(matches(value.clone(), json!({ "kind": "test", "otherField": 123 }).into()));
        assert!(!matches(value, json!({ "kind": "test", "otherField": 999 }).into()));
    }

    #[test]
    fn list_pattern_requires_exact_arity() {
        assert!(!matches(json!([1, 2, 3]), json!([1, 2]).into()));
        assert!(!matches(json!([1, 2, 3]), json!([1, 2, 3, 4]).into()));
        assert!(matches(json!([1, 2, 3]), json!([1, 2, 3]).into()));
        assert!(!matches(json!({ "0": 1, "1": 2, "2": 3 }), json!([1, 2, 3]).into()));
    }

    #[test]
    fn literal_does_not_match_other_types() {
        assert!(!matches(json!("123"), Pattern::from(123)));
        assert!(!matches(json!(null), Pattern::from(false)));
        assert!(matches(json!(123), Pattern::from(123)));
    }

    #[test]
    fn missing_required_key_is_a_miss() {
        assert!(!matches(json!({ "a": 1 }), Pattern::object([("b", any())])));
    }

    #[test]
    fn optional_absent_key_short_circuits_whole_map() {
        let pattern = Pattern::object([
            ("first", group(string(), "first")),
            ("maybe", optional(any())),
            ("never", Pattern::from("checked")),
        ]);
        let outcome = match_and_capture(&Value::from(json!({ "first": "x" })), &pattern)
            .expect("matching should not fail");

        assert!(outcome.matched);
        assert!(outcome.captures.is_empty());
    }

    #[test]
    fn optional_absent_key_skips_field_when_configured() {
        let options = QueryOptions::builder()
            .optional_fields(OptionalFieldMode::SkipField)
            .build()
            .expect("options should validate");
        let pattern = Pattern::object([
            ("first", group(string(), "first")),
            ("maybe", optional(any())),
            ("never", Pattern::from("checked")),
        ]);

        let outcome = match_with_options(&Value::from(json!({ "first": "x" })), &pattern, &options)
            .expect("matching should not fail");
        assert!(!outcome.matched);

        let outcome = match_with_options(
            &Value::from(json!({ "first": "x", "never": "checked" })),
            &pattern,
            &options,
        )
        .expect("matching should not fail");
        assert!(outcome.matched);
        assert_eq!(outcome.captures.first("first").map(|e| e.value.clone()), Some(Value::from("x")));
    }

    #[test]
    fn self_referencing_map_is_a_miss_not_a_loop() {
        let map = Map::from_entries([("kind", Value::from("node"))]);
        map.insert("next", Value::Map(map.clone()));
        let pattern = Pattern::object([("next", Pattern::object([("kind", "node")]))]);

        let outcome =
            match_and_capture(&Value::Map(map), &pattern).expect("matching should not fail");
        assert!(!outcome.matched);
    }
}
