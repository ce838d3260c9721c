use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("regex '{pattern}' failed to compile")]
    InvalidRegex {
        pattern: String,
        #[source]
        error: regex::Error,
    },
    #[error("alternation requires at least one branch")]
    EmptyAlternation,
}

pub type PatternResult<T> = Result<T, PatternError>;
