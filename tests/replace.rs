use serde_json::json;
use std::fmt;
use treematch_rs::pattern::{any, array_for, custom, group, regex_str, transform, try_transform};
use treematch_rs::{Map, MatchError, Pattern, Value, find_matches, rewrite};

fn re(source: &str) -> Pattern {
    regex_str(source).expect("regex should compile")
}

fn is_number() -> Pattern {
    custom(|v: &Value| v.as_f64().is_some())
}

// deep copy taken before a rewrite, compared against the input afterwards
fn snapshot(value: &Value) -> Value {
    Value::from(value.to_json().expect("fixture should serialize"))
}

// copy of `map` with `key` set to `value`
fn with_field(map: &Value, key: &str, value: Value) -> Value {
    let copy = Map::from_entries(map.as_map().map(Map::entries).unwrap_or_default());
    copy.insert(key, value);
    Value::Map(copy)
}

#[derive(Debug)]
struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("refused")
    }
}

impl std::error::Error for Refused {}

#[test]
fn rewrite_when_strings_match_then_they_are_wrapped() {
    let data = Value::from(json!({
        "field": "string",
        "other": "otherstring",
        "notstring": 123,
        "totallynotstring": "123",
    }));
    let pattern = transform(re("string"), |v: &Value, _| {
        format!("({})", v.as_str().unwrap_or_default())
    });

    let before = snapshot(&data);
    let out = rewrite(&data, &pattern, None).expect("rewrite should not fail");

    assert_eq!(
        out,
        Value::from(json!({
            "field": "(string)",
            "other": "(otherstring)",
            "notstring": 123,
            "totallynotstring": "123",
        }))
    );
    assert_eq!(data, before);
    assert_eq!(
        data.as_map().and_then(|m| m.get("field")),
        Some(Value::from("string"))
    );
}

#[test]
fn rewrite_when_node_replaced_then_its_children_are_not_visited() {
    let data = Value::from(json!({
        "type": "Item",
        "nested": { "type": "Item", "val": 123 },
    }));
    let pattern = transform(json!({ "type": "Item" }), |v: &Value, _| {
        with_field(v, "payload", Value::from(333))
    });

    let out = rewrite(&data, &pattern, None).expect("rewrite should not fail");

    assert_eq!(
        out,
        Value::from(json!({
            "type": "Item",
            "nested": { "type": "Item", "val": 123 },
            "payload": 333,
        }))
    );
    assert!(data.as_map().is_some_and(|m| !m.contains_key("payload")));
}

#[test]
fn rewrite_when_match_is_deep_then_ancestors_are_copied() {
    let data = Value::from(json!({
        "type": "Item",
        "nested": { "type": "Item", "val": 123 },
    }));
    let pattern = transform(Pattern::object([("val", is_number())]), |v: &Value, _| {
        with_field(v, "val", Value::from(333))
    });

    let before = snapshot(&data);

    let out = rewrite(&data, &pattern, None).expect("rewrite should not fail");

    assert_eq!(
        out,
        Value::from(json!({
            "type": "Item",
            "nested": { "type": "Item", "val": 333 },
        }))
    );
    assert_eq!(data, before);
    assert!(!out.strict_eq(&data));
    let original_nested = data.as_map().and_then(|m| m.get("nested"));
    assert_eq!(
        original_nested.and_then(|n| n.as_map().and_then(|m| m.get("val"))),
        Some(Value::from(123))
    );
}

#[test]
fn rewrite_when_array_for_transforms_elements_then_list_is_rebuilt() {
    let data = Value::from(json!({ "array": [1, "string", 2, "test"] }));
    let pattern = Pattern::object([(
        "array",
        array_for(transform(any(), |v: &Value, _| {
            if v.as_str() == Some("string") {
                Value::from("(string)")
            } else {
                v.clone()
            }
        })),
    )]);

    let out = rewrite(&data, &pattern, None).expect("rewrite should not fail");

    assert_eq!(out, Value::from(json!({ "array": [1, "(string)", 2, "test"] })));
    let original = data.as_map().and_then(|m| m.get("array"));
    assert_eq!(original, Some(Value::from(json!([1, "string", 2, "test"]))));
}

#[test]
fn group_when_wrapping_transform_then_replacement_is_captured() {
    let data = Value::from(json!({ "nest": { "inner": "test" } }));
    let pattern = Pattern::object([(
        "inner",
        group(
            transform(re("test"), |v: &Value, _| {
                v.as_str().map(|s| s.repeat(2)).unwrap_or_default()
            }),
            "doubled",
        ),
    )]);

    let matches = find_matches(&data, &pattern, None).expect("matching should not fail");
    let doubled = matches[0].captures.first("doubled").expect("doubled captured");
    assert_eq!(doubled.value, Value::from("test"));
    assert_eq!(doubled.replacement, Some(Value::from("testtest")));
}

#[test]
fn group_when_wrapping_compound_then_rebuilt_compound_is_captured() {
    let data = Value::from(json!({ "nest": { "inner": { "prop": "test" } } }));
    let pattern = Pattern::object([(
        "inner",
        group(
            Pattern::object([(
                "prop",
                transform(re("test"), |v: &Value, _| {
                    v.as_str().map(|s| s.repeat(2)).unwrap_or_default()
                }),
            )]),
            "doubled",
        ),
    )]);

    let matches = find_matches(&data, &pattern, None).expect("matching should not fail");
    let doubled = matches[0].captures.first("doubled").expect("doubled captured");
    assert_eq!(doubled.replacement, Some(Value::from(json!({ "prop": "testtest" }))));
}

#[test]
fn list_pattern_when_elements_transform_then_replacement_is_rebuilt_list() {
    let data = Value::from(json!({ "nest": { "inner": [1, 2, 3] } }));
    let pattern = Pattern::object([(
        "inner",
        Pattern::list([
            transform(is_number(), |v: &Value, _| v.as_f64().unwrap_or_default() * 2.0),
            any(),
            transform(is_number(), |v: &Value, _| v.as_f64().unwrap_or_default() + 2.0),
        ]),
    )]);

    let matches = find_matches(&data, &pattern, None).expect("matching should not fail");
    assert_eq!(
        matches[0].replacement,
        Some(Value::from(json!({ "inner": [2, 2, 5] })))
    );
}

#[test]
fn rewrite_when_nothing_matches_then_root_handle_is_returned() {
    let data = Value::from(json!({ "a": [1, { "b": 2 }] }));
    let pattern = transform(re("never"), |v: &Value, _| v.clone());

    let out = rewrite(&data, &pattern, None).expect("rewrite should not fail");
    assert!(out.strict_eq(&data));
}

#[test]
fn rewrite_when_sibling_untouched_then_subtree_is_shared() {
    let data = Value::from(json!({ "keep": { "x": [1, 2] }, "swap": "old" }));
    let pattern = transform(Pattern::from("old"), |_: &Value, _| "new");
    let before = snapshot(&data);

    let out = rewrite(&data, &pattern, None).expect("rewrite should not fail");
    assert_eq!(data, before);
    let kept_before = data.as_map().and_then(|m| m.get("keep")).expect("keep present");
    let kept_after = out.as_map().and_then(|m| m.get("keep")).expect("keep present");

    assert!(kept_before.strict_eq(&kept_after));
    assert_eq!(out.as_map().and_then(|m| m.get("swap")), Some(Value::from("new")));
}

#[test]
fn match_without_transform_when_rewritten_then_nothing_changes() {
    let data = Value::from(json!({ "kind": "x", "inner": { "kind": "x" } }));
    let out = rewrite(&data, &json!({ "kind": "x" }).into(), None).expect("rewrite should not fail");
    assert!(out.strict_eq(&data));
}

#[test]
fn try_transform_when_callback_fails_then_error_aborts_rewrite() {
    let data = Value::from(json!({ "a": { "b": "boom" } }));
    let pattern = try_transform(Pattern::from("boom"), |_: &Value, _| {
        Err::<Value, _>(Refused)
    });

    match rewrite(&data, &pattern, None) {
        Err(MatchError::Callback { combinator, source }) => {
            assert_eq!(combinator, "transform");
            assert_eq!(source.to_string(), "refused");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
