use super::{List, Map, Value};
use crate::types::NodeId;
use hashbrown::HashSet as FastHashSet;

type AssumedPairs = FastHashSet<(NodeId, NodeId)>;

// Deep structural equality. A pair of containers already under comparison is
// assumed equal, so cyclic values compare without diverging.
fn deep_eq(a: &Value, b: &Value, assumed: &mut AssumedPairs) -> bool {
    match (a, b) {
        (Value::List(x), Value::List(y)) => lists_eq(x, y, assumed),
        (Value::Map(x), Value::Map(y)) => maps_eq(x, y, assumed),
        _ => a.strict_eq(b),
    }
}

fn lists_eq(x: &List, y: &List, assumed: &mut AssumedPairs) -> bool {
    if x.ptr_eq(y) || !assumed.insert((x.id(), y.id())) {
        return true;
    }

    let xs = x.items();
    let ys = y.items();

    xs.len() == ys.len()
        && xs
            .iter()
            .zip(ys.iter())
            .all(|(a, b)| deep_eq(a, b, assumed))
}

fn maps_eq(x: &Map, y: &Map, assumed: &mut AssumedPairs) -> bool {
    if x.ptr_eq(y) || !assumed.insert((x.id(), y.id())) {
        return true;
    }

    if x.len() != y.len() {
        return false;
    }

    x.entries().iter().all(|(key, value)| match y.get(key) {
        Some(other) => deep_eq(value, &other, assumed),
        None => false,
    })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other, &mut AssumedPairs::default())
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        lists_eq(self, other, &mut AssumedPairs::default())
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        maps_eq(self, other, &mut AssumedPairs::default())
    }
}
