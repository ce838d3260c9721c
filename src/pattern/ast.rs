use super::Predicate;
use crate::types::MapKey;
use crate::value::Value;
use serde_json::Value as JsonValue;
use std::rc::Rc;

/// What a node must look like: a literal, a map of field patterns, a fixed-arity
/// list of element patterns, or a combinator predicate.
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(Value),
    Map(Rc<[(MapKey, Pattern)]>),
    List(Rc<[Pattern]>),
    Predicate(Rc<Predicate>),
}

impl Pattern {
    pub fn object<I, K, P>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<MapKey>,
        P: Into<Pattern>,
    {
        let fields: Vec<(MapKey, Pattern)> = fields
            .into_iter()
            .map(|(key, pattern)| (key.into(), pattern.into()))
            .collect();
        Pattern::Map(fields.into())
    }

    pub fn list<I, P>(items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        let items: Vec<Pattern> = items.into_iter().map(Into::into).collect();
        Pattern::List(items.into())
    }

    pub fn literal<V: Into<Value>>(value: V) -> Self {
        Pattern::Literal(value.into())
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        match self {
            Pattern::Predicate(predicate) => Some(predicate),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.predicate(), Some(Predicate::Optional(_)))
    }
}

impl From<Predicate> for Pattern {
    fn from(predicate: Predicate) -> Self {
        Pattern::Predicate(Rc::new(predicate))
    }
}

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::Literal(value)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<bool> for Pattern {
    fn from(value: bool) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<f64> for Pattern {
    fn from(value: f64) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<i32> for Pattern {
    fn from(value: i32) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<i64> for Pattern {
    fn from(value: i64) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<u32> for Pattern {
    fn from(value: u32) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<Vec<Pattern>> for Pattern {
    fn from(items: Vec<Pattern>) -> Self {
        Pattern::List(items.into())
    }
}

/// JSON objects become map patterns and arrays become list patterns, so a
/// `json!` literal reads like the shape it matches.
impl From<JsonValue> for Pattern {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Array(items) => Pattern::list(items.into_iter().map(Pattern::from)),
            JsonValue::Object(fields) => {
                Pattern::object(fields.into_iter().map(|(key, value)| (key, Pattern::from(value))))
            }
            scalar => Pattern::Literal(Value::from(scalar)),
        }
    }
}
