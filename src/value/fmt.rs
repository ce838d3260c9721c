use super::{IdentitySet, Value};
use std::cell::RefCell;
use std::fmt;

struct Guarded<'a> {
    value: &'a Value,
    active: &'a RefCell<IdentitySet>,
}

impl fmt::Debug for Guarded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self.value {
            Value::Absent => return f.write_str("Absent"),
            Value::Null => return f.write_str("Null"),
            Value::Bool(b) => return write!(f, "{b}"),
            Value::Number(n) => return write!(f, "{n}"),
            Value::String(s) => return write!(f, "{s:?}"),
            Value::List(list) => list.id(),
            Value::Map(map) => map.id(),
        };

        if !self.active.borrow_mut().insert(id) {
            return f.write_str("<cycle>");
        }

        let result = match self.value {
            Value::List(list) => f
                .debug_list()
                .entries(list.items().iter().map(|value| Guarded {
                    value,
                    active: self.active,
                }))
                .finish(),
            Value::Map(map) => {
                let entries = map.entries();
                f.debug_map()
                    .entries(entries.iter().map(|(key, value)| {
                        (
                            key,
                            Guarded {
                                value,
                                active: self.active,
                            },
                        )
                    }))
                    .finish()
            }
            _ => Ok(()),
        };

        self.active.borrow_mut().remove(id);
        result
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = RefCell::new(IdentitySet::new());
        fmt::Debug::fmt(
            &Guarded {
                value: self,
                active: &active,
            },
            f,
        )
    }
}

impl fmt::Debug for super::List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::List(self.clone()), f)
    }
}

impl fmt::Debug for super::Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Map(self.clone()), f)
    }
}
