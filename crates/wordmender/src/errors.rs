//! # Error Types

use crate::{alloc::string::String, batch::DType};

/// Errors from wordmender operations.
#[derive(Debug, thiserror::Error)]
pub enum WordmenderError {
    /// The caller passed a value of the wrong kind or shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// The batch element type has no decode path.
    #[error("the element type `{dtype}` is not supported; expected one of i16, i32, i64")]
    NotSupported {
        /// The offending element type.
        dtype: DType,
    },

    /// Batch storage does not match the declared shape.
    #[error("shape mismatch: shape holds {expected} elements, storage holds {actual}")]
    ShapeMismatch {
        /// The element count implied by the shape.
        expected: usize,
        /// The element count of the storage.
        actual: usize,
    },

    /// Token index is outside the vocabulary index space.
    #[error("token index {index} is out of range")]
    TokenOutOfRange {
        /// The offending index, widened to `i64`.
        index: i64,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (scores, byte pieces, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Alias for [`WordmenderError`].
pub type WMError = WordmenderError;

/// Result type for wordmender operations.
pub type WMResult<T> = core::result::Result<T, WordmenderError>;
