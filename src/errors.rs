use thiserror::Error;

/// Errors surfaced while assembling a term forest.
///
/// Malformed term data is never an error: dangling parents and parent cycles
/// degrade to root promotion, duplicate ids resolve last-write-wins, so a
/// transiently inconsistent store snapshot still renders. Only explicitly
/// configured limits refuse input.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("term collection exceeds limit: {count} terms, limit {limit}")]
    TooManyTerms { count: usize, limit: usize },

    #[error("hierarchy exceeds depth limit: {depth} levels, limit {limit}")]
    TooDeep { depth: usize, limit: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
