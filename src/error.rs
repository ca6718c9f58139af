//! Error types for seqkit.
//!
//! Every fallible operation in the crate reports through [`SeqKitError`],
//! derived with `thiserror`. Total functions return plain values.

use thiserror::Error;

/// The error type for seqkit operations.
///
/// Raised when an argument falls outside the documented domain of an
/// operation, never for inputs the operation defines a result for.
#[derive(Error, Debug)]
pub enum SeqKitError {
    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds {
        /// The index that was accessed
        index: usize,
        /// The valid length
        length: usize,
    },

    /// An index path descended into a scalar element
    #[error("Not a sequence: element at depth {depth} cannot be indexed")]
    NotASequence {
        /// Number of indices already applied when the scalar was reached
        depth: usize,
    },

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for seqkit operations.
pub type Result<T> = std::result::Result<T, SeqKitError>;
