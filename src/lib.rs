pub mod capture;
pub mod errors;
pub mod matcher;
pub mod pattern;
pub mod query;
pub mod types;
pub mod value;
pub mod walk;

pub use capture::{CaptureBag, CaptureEntry, merge_captures};
pub use errors::{MatchError, MatchResult};
pub use matcher::{MatchOutcome, is_match, match_and_capture, match_with_options};
pub use pattern::{Pattern, PatternError, Predicate};
pub use query::{
    OptionalFieldMode, Query, QueryOptions, QueryOptionsError, find_matches, rewrite,
};
pub use value::{List, Map, Value};
pub use walk::{EdgeKey, FoundMatch, IgnoreEdge, Visit, walk};
