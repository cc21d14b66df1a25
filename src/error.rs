//! Error type shared by all fallible [`BitArray`](crate::BitArray) operations.

use thiserror::Error;

/// Result type alias for bit array operations.
pub type Result<T> = core::result::Result<T, BitArrayError>;

/// Errors reported by [`BitArray`](crate::BitArray) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitArrayError {
    /// A bit index, or the end of a bit range, lies beyond the logical length.
    #[error("{operation}: position {position} out of range for length {len}")]
    OutOfRange {
        /// Name of the operation that rejected the position.
        operation: &'static str,
        /// The offending index or range end.
        position: usize,
        /// Logical length of the array at the time of the call.
        len: usize,
    },

    /// A string contained something other than `'0'` and `'1'`.
    #[error("invalid character {found:?} at byte {position}, expected '0' or '1'")]
    InvalidFormat {
        /// Byte offset of the first invalid character.
        position: usize,
        /// The invalid character.
        found: char,
    },
}

impl BitArrayError {
    pub(crate) const fn out_of_range(operation: &'static str, position: usize, len: usize) -> Self {
        Self::OutOfRange {
            operation,
            position,
            len,
        }
    }
}
