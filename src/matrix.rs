//! # Upper-triangular matrix
//!
//! A square matrix storing only the on- and above-diagonal elements. Row `i`
//! is a `BoundedVector` holding columns `i..size`, with start index `i`, so
//! the row's own bounds check rejects below-diagonal column access.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::zip_eq;
use num_traits::{One, Zero};

use crate::error::Error;
use crate::vector::BoundedVector;

/// Largest dimension a `TriangularMatrix` may have.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Square upper-triangular matrix. Dimension is fixed at creation.
///
/// Invariant, established by every constructor and preserved by cloning: the
/// matrix of dimension `n` holds `n` rows, row `i` of length `n - i` with
/// start index `i`. Cloning deep-copies every row.
#[derive(Debug, Clone)]
pub struct TriangularMatrix<T> {
    rows: Vec<BoundedVector<T>>,
    size: usize,
}

impl<T> TriangularMatrix<T> {
    /// Create a matrix of dimension `size` with all stored elements zero.
    ///
    /// # Arguments
    ///
    /// * `size`: Matrix dimension, in `1..=MAX_MATRIX_SIZE`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `size` is zero or exceeds `MAX_MATRIX_SIZE`.
    pub fn new(size: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        Self::check_size(size)?;

        let rows = (0..size)
            .map(|i| BoundedVector::with_start(size - i, i))
            .collect::<Result<_, _>>()?;
        Ok(Self { rows, size, })
    }

    /// Create a matrix from explicit upper-triangular row data.
    ///
    /// # Arguments
    ///
    /// * `data`: One `Vec` per row; row `i` must hold the `size - i` values of
    /// columns `i..size`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when the number of rows is zero or exceeds
    /// `MAX_MATRIX_SIZE`, `SizeMismatch` when a row has the wrong length.
    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self, Error> {
        let size = data.len();
        Self::check_size(size)?;

        let rows = data.into_iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != size - i {
                    return Err(Error::SizeMismatch { left: size - i, right: row.len(), });
                }
                BoundedVector::from_data(row, i)
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { rows, size, })
    }

    /// Create an identity matrix of dimension `size`.
    pub fn identity(size: usize) -> Result<Self, Error>
    where
        T: Zero + One + Clone,
    {
        let mut matrix = Self::new(size)?;
        for i in 0..size {
            matrix.rows[i].set(i, T::one())?;
        }

        Ok(matrix)
    }

    fn check_size(size: usize) -> Result<(), Error> {
        if size == 0 || size > MAX_MATRIX_SIZE {
            Err(Error::InvalidSize { size, maximum: MAX_MATRIX_SIZE, })
        } else {
            Ok(())
        }
    }

    /// The dimension of this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Retrieve row `row`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row >= size`.
    pub fn row(&self, row: usize) -> Result<&BoundedVector<T>, Error> {
        if row >= self.size {
            return Err(Error::IndexOutOfRange { index: row, start: 0, end: self.size, });
        }

        Ok(&self.rows[row])
    }

    /// Retrieve row `row` for in-place modification.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row >= size`.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut BoundedVector<T>, Error> {
        if row >= self.size {
            return Err(Error::IndexOutOfRange { index: row, start: 0, end: self.size, });
        }

        Ok(&mut self.rows[row])
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row >= size`, or when `column` lies outside
    /// `row..size` (the row's own range check).
    pub fn get(&self, row: usize, column: usize) -> Result<&T, Error> {
        self.row(row)?.get(column)
    }

    /// Set the value at coordinate (`row`, `column`).
    ///
    /// Storage is untouched when either index is rejected.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), Error> {
        self.row_mut(row)?.set(column, value)
    }

    /// Iterate over the rows of this matrix.
    pub fn iter_rows(&self) -> Iter<'_, BoundedVector<T>> {
        self.rows.iter()
    }

    /// Both operands of a binary operation must have equal dimension.
    fn check_same_size(&self, other: &Self) -> Result<(), Error> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.size, right: other.size, })
        }
    }

    /// Elementwise sum of two matrices of equal dimension.
    ///
    /// Equal dimensions guarantee equal row shapes, so the per-row additions
    /// are validated once here rather than again per row.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        T: Add<Output = T> + Clone,
    {
        self.check_same_size(other)?;

        let rows = zip_eq(self.rows.iter(), other.rows.iter())
            .map(|(left, right)| left.try_add(right))
            .collect::<Result<_, _>>()?;
        Ok(Self { rows, size: self.size, })
    }

    /// Elementwise difference of two matrices of equal dimension.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        T: Sub<Output = T> + Clone,
    {
        self.check_same_size(other)?;

        let rows = zip_eq(self.rows.iter(), other.rows.iter())
            .map(|(left, right)| left.try_sub(right))
            .collect::<Result<_, _>>()?;
        Ok(Self { rows, size: self.size, })
    }
}

impl<T> Index<usize> for TriangularMatrix<T> {
    type Output = BoundedVector<T>;

    /// Panics when `row >= size`. Column access through the returned row is
    /// bounds-checked by the row itself.
    fn index(&self, row: usize) -> &Self::Output {
        match self.row(row) {
            Ok(vector) => vector,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for TriangularMatrix<T> {
    /// Panics when `row >= size`.
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.row_mut(row) {
            Ok(vector) => vector,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Dimensions must match and every row must compare equal.
impl<T: PartialEq> PartialEq for TriangularMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.rows == other.rows
    }
}

impl<T: Eq> Eq for TriangularMatrix<T> {}

impl<T: Display> Display for TriangularMatrix<T> {
    /// One row per line, stored values only.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            let mut values = row.iter_values();
            if let Some(first) = values.next() {
                write!(f, "{}", first)?;
            }
            for value in values {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
