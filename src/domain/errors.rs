//! Error type shared by the expense store and the category registry.
use thiserror::Error;

/// Everything a mutating operation can report back to the user. None of
/// these are fatal; the in-memory state is whatever the operation left it
/// as (validation failures change nothing, a failed file write leaves
/// memory ahead of disk until the next successful save).
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A required form field was empty or absent.
    #[error("please fill in all fields: {0} is missing")]
    MissingField(&'static str),

    /// The amount text did not parse as a number.
    #[error("invalid amount {0:?}: please enter a valid number")]
    InvalidAmount(String),

    /// remove/edit addressed a position with no expense behind it.
    #[error("no expense at position {0}")]
    ExpenseNotFound(usize),

    /// The backing file could not be read or written.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
