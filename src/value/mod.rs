mod eq;
mod fmt;
mod identity;
mod json;
mod list;
mod map;
mod node;

pub use identity::IdentitySet;
pub use list::List;
pub use map::Map;
pub use node::Value;
