//! # Error reporting for container construction and access
//!
//! A single enum describing every way construction, indexing or a binary
//! operation on the containers in this crate can fail. Failures are raised at
//! the offending call, before any allocation or mutation took place.
use std::error;
use std::fmt;
use std::fmt::Display;

/// Any failure of a container operation.
///
/// Every variant carries the values that caused the rejection, so the message
/// can state both what was asked for and what would have been acceptable.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A requested element count is zero or larger than the container's
    /// maximum (`MAX_VECTOR_SIZE` or `MAX_MATRIX_SIZE`).
    InvalidSize {
        /// The rejected element count.
        size: usize,
        /// The largest acceptable element count.
        maximum: usize,
    },
    /// A requested start index is unrepresentable for the requested length:
    /// `start_index + len` would overflow `usize`.
    InvalidStartIndex {
        /// The rejected start index.
        start_index: usize,
        /// The length it was combined with.
        len: usize,
    },
    /// A logical index outside the valid range of the instance.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Lowest valid index.
        start: usize,
        /// One past the highest valid index.
        end: usize,
    },
    /// A binary operation between two containers of differing element counts.
    SizeMismatch {
        /// Element count of the left operand.
        left: usize,
        /// Element count of the right operand.
        right: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { size, maximum } => {
                write!(f, "invalid size {}: must be in 1..={}", size, maximum)
            }
            Error::InvalidStartIndex { start_index, len } => {
                write!(
                    f,
                    "invalid start index {}: end of range for length {} overflows",
                    start_index, len,
                )
            }
            Error::IndexOutOfRange { index, start, end } => {
                write!(f, "index {} out of range {}..{}", index, start, end)
            }
            Error::SizeMismatch { left, right } => {
                write!(f, "size mismatch: {} versus {}", left, right)
            }
        }
    }
}

impl error::Error for Error {}
