use crate::value::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKey<'a> {
    Key(&'a str),
    Index(usize),
}

impl fmt::Display for EdgeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKey::Key(key) => f.write_str(key),
            EdgeKey::Index(index) => write!(f, "{index}"),
        }
    }
}

/// `(key, parent, child) -> true` suppresses descent along that edge only.
pub type IgnoreEdge<'a> = dyn Fn(EdgeKey<'_>, &Value, &Value) -> bool + 'a;
