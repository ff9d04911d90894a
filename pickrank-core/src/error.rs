/// Error taxonomy for the ranking engine.
///
/// Every error is a caller precondition violation detected before any
/// mutation, so a failed call always leaves the session untouched.
use thiserror::Error;

/// Errors returned by [`RankingState`](crate::RankingState) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The pool is too small to produce a single comparison.
    #[error("need at least 2 items to rank, got {len}")]
    InvalidInput { len: usize },

    /// A pick was submitted after the ranking finished.
    #[error("ranking is already complete")]
    AlreadyComplete,

    /// The pick does not name a slot of the presented pair.
    #[error("invalid pick: {0}")]
    InvalidPick(String),
}

pub type Result<T> = std::result::Result<T, RankError>;
