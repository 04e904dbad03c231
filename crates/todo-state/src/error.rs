//! List Errors

use thiserror::Error;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Errors raised by list construction and validated operations.
///
/// Everyday operations (toggle, remove, add at capacity) are no-ops rather
/// than errors; these variants surface only where a caller handed in
/// malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list is full ({max} items)")]
    AtCapacity { max: usize },

    #[error("no item with id {0}")]
    NotFound(u32),

    #[error("reorder supplied {got} items, list holds {expected}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("reorder references unknown id {0}")]
    UnknownId(u32),

    #[error("id {0} appears more than once")]
    DuplicateId(u32),

    #[error("seed id {0} is reserved")]
    ReservedId(u32),

    #[error("no ids left to hand out")]
    IdsExhausted,

    #[error("max_items must be at least 1")]
    EmptyCapacity,

    #[error("seed holds {seed} items but max_items is {max}")]
    SeedTooLarge { seed: usize, max: usize },
}
