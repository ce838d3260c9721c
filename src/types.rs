use std::rc::Rc;

pub type GroupName = Rc<str>;
pub type MapKey = Rc<str>;
pub type NodeId = usize;

/// Error raised by user callbacks (`nothrow`, `coerce`, `transform`).
pub type Fault = Box<dyn std::error::Error + Send + Sync + 'static>;
