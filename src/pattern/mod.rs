mod ast;
pub mod constructors;
mod error;
mod predicate;
mod regex_cache;

pub use ast::Pattern;
pub use constructors::*;
pub use error::{PatternError, PatternResult};
pub use predicate::{AssertFn, CaptureFn, DeriveFn, Predicate, PredicateFn};
pub use regex_cache::RegexCache;
