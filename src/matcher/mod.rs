mod combinators;
mod context;
mod outcome;
pub mod resolver;

pub(crate) use context::MatchContext;
pub use outcome::MatchOutcome;
pub(crate) use resolver::match_node;
pub use resolver::{is_match, match_and_capture, match_with_options};
