use super::{IdentitySet, List, Map, Value};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::cell::RefCell;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s.into()),
            JsonValue::Array(items) => {
                Value::List(List::from_items(items.into_iter().map(Value::from)))
            }
            JsonValue::Object(fields) => Value::Map(Map::from_entries(
                fields.into_iter().map(|(key, value)| (key, Value::from(value))),
            )),
        }
    }
}

impl Value {
    /// Converts to JSON. `Absent` becomes `null`; cyclic values are an error.
    pub fn to_json(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }
}

struct Tracked<'a> {
    value: &'a Value,
    active: &'a RefCell<IdentitySet>,
}

impl Tracked<'_> {
    fn child<'b>(&'b self, value: &'b Value) -> Tracked<'b> {
        Tracked {
            value,
            active: self.active,
        }
    }
}

impl Serialize for Tracked<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Absent => serializer.serialize_none(),
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            // integral numbers go out as integers so JSON round trips compare equal
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(list) => {
                if !self.active.borrow_mut().insert(list.id()) {
                    return Err(S::Error::custom("cannot serialize a cyclic list"));
                }
                let items = list.items();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in &items {
                    seq.serialize_element(&self.child(item))?;
                }
                self.active.borrow_mut().remove(list.id());
                seq.end()
            }
            Value::Map(map) => {
                if !self.active.borrow_mut().insert(map.id()) {
                    return Err(S::Error::custom("cannot serialize a cyclic map"));
                }
                let entries = map.entries();
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in &entries {
                    out.serialize_entry(&**key, &self.child(value))?;
                }
                self.active.borrow_mut().remove(map.id());
                out.end()
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let active = RefCell::new(IdentitySet::new());
        Tracked {
            value: self,
            active: &active,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects_keep_key_order() {
        let value = Value::from(json!({ "b": 1, "a": 2, "c": 3 }));
        let keys: Vec<String> = match &value {
            Value::Map(map) => map.keys().iter().map(|k| k.to_string()).collect(),
            other => panic!("expected map, got {other:?}"),
        };
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn to_json_round_trips_acyclic_values() {
        let value = Value::from(json!({ "name": "x", "tags": ["a", null, true], "n": 3, "f": 1.5 }));
        let json = value.to_json().expect("acyclic value should serialize");
        assert_eq!(json, json!({ "name": "x", "tags": ["a", null, true], "n": 3, "f": 1.5 }));
    }

    #[test]
    fn to_json_rejects_cycles() {
        let list = List::new();
        list.push(Value::List(list.clone()));
        assert!(Value::List(list).to_json().is_err());
    }
}
