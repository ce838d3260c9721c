mod options;
mod service;

pub use options::{OptionalFieldMode, QueryOptions, QueryOptionsBuilder, QueryOptionsError};
pub use service::{Query, find_matches, rewrite};
