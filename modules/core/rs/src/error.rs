use thiserror::Error;

/// Error kinds reported by annobit. Fallible functions return `eyre::Result`, the kind can be
/// recovered with `report.downcast_ref::<Error>()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operand of the wrong kind was passed to an operation.
    #[error("type error: {0}")]
    Type(String),
    /// The requested element is not present in the collection.
    #[error("not found: {0}")]
    NotFound(String),
    /// A position falls outside the stored sequence.
    #[error("position {position} is out of bounds for a sequence of length {len}")]
    OutOfBounds { position: String, len: usize },
    /// The length of an assigned value doesn't match the target.
    #[error("length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Error {
    pub fn out_of_bounds(position: impl ToString, len: usize) -> Self {
        Self::OutOfBounds {
            position: position.to_string(),
            len,
        }
    }
}
