use crate::pattern::PatternError;
use crate::query::QueryOptionsError;
use crate::types::Fault;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{combinator} callback failed: {source}")]
    Callback {
        combinator: &'static str,
        #[source]
        source: Fault,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] QueryOptionsError),
}

pub type MatchResult<T> = Result<T, MatchError>;
