mod collect;
mod edge;
mod replace;
mod traversal;

pub use collect::FoundMatch;
pub(crate) use collect::collect_matches;
pub use edge::{EdgeKey, IgnoreEdge};
pub(crate) use replace::replace_matches;
pub use traversal::{Visit, Walker, walk};
