//! # Bounded vector
//!
//! Wrapping a `Vec` such that it has a fixed length, a configurable lowest
//! valid index and checked element access.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::zip_eq;
use num_traits::Zero;

use crate::error::Error;

/// Largest number of elements a `BoundedVector` may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
///
/// Logical indices run over `[start_index, start_index + len)`; a logical index
/// `i` maps to storage offset `i - start_index`. Cloning produces a fully
/// independent copy, no storage is ever shared between instances.
#[derive(Debug, Clone)]
pub struct BoundedVector<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T> BoundedVector<T> {
    /// Create a vector of `len` zero elements with the lowest valid index `0`.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, in `1..=MAX_VECTOR_SIZE`.
    pub fn new(len: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        Self::with_start(len, 0)
    }

    /// Create a vector of `len` zero elements with the lowest valid index
    /// `start_index`.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, in `1..=MAX_VECTOR_SIZE`.
    /// * `start_index`: Lowest valid logical index; `start_index + len` must
    /// not overflow.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `len` is zero or exceeds `MAX_VECTOR_SIZE`,
    /// `InvalidStartIndex` when the index range would be unrepresentable.
    pub fn with_start(len: usize, start_index: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        Self::check_shape(len, start_index)?;

        Ok(Self { data: vec![T::zero(); len], start_index, })
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: T, len: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::check_shape(len, 0)?;

        Ok(Self { data: vec![value; len], start_index: 0, })
    }

    /// Create a vector from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Element values in logical order. Will not be changed and
    /// directly used for creation.
    /// * `start_index`: Lowest valid logical index.
    pub fn from_data(data: Vec<T>, start_index: usize) -> Result<Self, Error> {
        Self::check_shape(data.len(), start_index)?;

        Ok(Self { data, start_index, })
    }

    /// Shape validation shared by all constructors, done before any
    /// allocation.
    fn check_shape(len: usize, start_index: usize) -> Result<(), Error> {
        if len == 0 || len > MAX_VECTOR_SIZE {
            return Err(Error::InvalidSize { size: len, maximum: MAX_VECTOR_SIZE, });
        }
        if start_index > usize::MAX - len {
            return Err(Error::InvalidStartIndex { start_index, len, });
        }

        Ok(())
    }

    /// The number of elements in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty. Always `false`: zero-length vectors can
    /// not be constructed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The lowest valid logical index.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the highest valid logical index.
    ///
    /// Never overflows, the constructors reject shapes where it would.
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len()
    }

    /// Map a logical index to a storage offset, rejecting values outside
    /// `[start_index, end_index)`.
    fn offset(&self, index: usize) -> Result<usize, Error> {
        if index < self.start_index || index >= self.end_index() {
            Err(Error::IndexOutOfRange {
                index,
                start: self.start_index,
                end: self.end_index(),
            })
        } else {
            Ok(index - self.start_index)
        }
    }

    /// Retrieve the value at a logical index.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let offset = self.offset(index)?;

        Ok(&self.data[offset])
    }

    /// Retrieve the value at a logical index for in-place modification.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let offset = self.offset(index)?;

        Ok(&mut self.data[offset])
    }

    /// Set the value at a logical index.
    ///
    /// Storage is untouched when the index is rejected.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        let offset = self.offset(index)?;
        self.data[offset] = value;

        Ok(())
    }

    /// Iterate over the values of this vector in logical order.
    pub fn iter_values(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Both operands of a binary operation must hold equally many elements.
    fn check_same_size(&self, other: &Self) -> Result<(), Error> {
        if self.data.len() == other.data.len() {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                left: self.data.len(),
                right: other.data.len(),
            })
        }
    }

    /// Elementwise sum of two vectors of equal length.
    ///
    /// The result takes the left operand's start index.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        T: Add<Output = T> + Clone,
    {
        self.check_same_size(other)?;

        let data = zip_eq(self.data.iter(), other.data.iter())
            .map(|(left, right)| left.clone() + right.clone())
            .collect();
        Ok(Self { data, start_index: self.start_index, })
    }

    /// Elementwise difference of two vectors of equal length.
    ///
    /// The result takes the left operand's start index.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        T: Sub<Output = T> + Clone,
    {
        self.check_same_size(other)?;

        let data = zip_eq(self.data.iter(), other.data.iter())
            .map(|(left, right)| left.clone() - right.clone())
            .collect();
        Ok(Self { data, start_index: self.start_index, })
    }

    /// Compute the inner product with another vector of equal length.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` when the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<T, Error>
    where
        T: Zero + Mul<Output = T> + Clone,
    {
        self.check_same_size(other)?;

        let total = zip_eq(self.data.iter(), other.data.iter())
            .fold(T::zero(), |total, (left, right)| {
                total + left.clone() * right.clone()
            });
        Ok(total)
    }
}

impl<T> Index<usize> for BoundedVector<T> {
    type Output = T;

    /// Panics when `index` is outside `[start_index, end_index)`.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for BoundedVector<T> {
    /// Panics when `index` is outside `[start_index, end_index)`.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Length and elements at corresponding positions must match; the start index
/// does not participate in equality.
impl<T: PartialEq> PartialEq for BoundedVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for BoundedVector<T> {}

impl<T: Add<Output = T> + Clone> Add<T> for BoundedVector<T> {
    type Output = Self;

    /// Add a scalar to every element.
    fn add(self, rhs: T) -> Self::Output {
        Self {
            data: self.data.into_iter().map(|value| value + rhs.clone()).collect(),
            start_index: self.start_index,
        }
    }
}

impl<T: Sub<Output = T> + Clone> Sub<T> for BoundedVector<T> {
    type Output = Self;

    /// Subtract a scalar from every element.
    fn sub(self, rhs: T) -> Self::Output {
        Self {
            data: self.data.into_iter().map(|value| value - rhs.clone()).collect(),
            start_index: self.start_index,
        }
    }
}

impl<T: Mul<Output = T> + Clone> Mul<T> for BoundedVector<T> {
    type Output = Self;

    /// Multiply every element by a scalar.
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            data: self.data.into_iter().map(|value| value * rhs.clone()).collect(),
            start_index: self.start_index,
        }
    }
}

impl<T: Display> Display for BoundedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}
