//! # Bounded containers for upper-triangular linear algebra
//!
//! Two value-semantics containers: a fixed-length vector whose lowest valid
//! index is configurable, and a square upper-triangular matrix storing one such
//! vector per row. All construction and access is validated; failures are
//! reported through the [`Error`] type rather than silently clamped.
#![warn(missing_docs)]

pub mod error;
pub mod matrix;
pub mod vector;

pub use error::Error;
pub use matrix::{TriangularMatrix, MAX_MATRIX_SIZE};
pub use vector::{BoundedVector, MAX_VECTOR_SIZE};
