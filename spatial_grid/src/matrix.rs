// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size, row-major 2D array.

use alloc::boxed::Box;
use core::fmt::Debug;
use core::ops::{Index, IndexMut};

use crate::error::{GridError, Result};

/// A `rows × columns` array stored row-major in one heap allocation.
///
/// The shape is fixed at construction. Indexing with `matrix[(row, column)]` does not
/// check the row and column separately: a column past the end silently lands in the
/// next row, and only a flat index past the end panics. Use [`at`][Self::at] or
/// [`get`][Self::get] for checked access.
pub struct Matrix<T> {
    data: Box<[T]>,
    rows: usize,
    columns: usize,
}

impl<T: Default> Matrix<T> {
    /// Create a matrix with every element set to `T::default()`.
    ///
    /// Fails with [`GridError::InvalidArgument`] when `rows` or `columns` is zero, or
    /// when the element count or its size in bytes does not fit the address space.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidArgument(
                "Matrix::new: rows and columns must be greater than 0",
            ));
        }
        let len = rows
            .checked_mul(columns)
            .filter(|len| {
                len.checked_mul(size_of::<T>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(GridError::InvalidArgument("Matrix::new: shape is too large"))?;
        Ok(Self {
            data: (0..len).map(|_| T::default()).collect(),
            rows,
            columns,
        })
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat (row-major) offset of `(row, column)`. Not range checked.
    #[inline]
    pub fn flat_index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// `(row, column)` of a flat offset.
    #[inline]
    pub fn index_of_flat(&self, flat: usize) -> (usize, usize) {
        (flat / self.columns, flat % self.columns)
    }

    /// Whether `(row, column)` lies inside the matrix.
    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Element at `(row, column)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if self.contains(row, column) {
            Some(&self.data[self.flat_index(row, column)])
        } else {
            None
        }
    }

    /// Mutable element at `(row, column)`, or `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if self.contains(row, column) {
            let i = self.flat_index(row, column);
            Some(&mut self.data[i])
        } else {
            None
        }
    }

    /// Element at `(row, column)`, failing with [`GridError::OutOfRange`].
    pub fn at(&self, row: usize, column: usize) -> Result<&T> {
        self.get(row, column).ok_or(GridError::OutOfRange("Matrix::at"))
    }

    /// Mutable element at `(row, column)`, failing with [`GridError::OutOfRange`].
    pub fn at_mut(&mut self, row: usize, column: usize) -> Result<&mut T> {
        self.get_mut(row, column).ok_or(GridError::OutOfRange("Matrix::at_mut"))
    }

    /// Iterate all elements in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate all elements mutably in row-major order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.data[self.flat_index(row, column)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let i = self.flat_index(row, column);
        &mut self.data[i]
    }
}

impl<T> Debug for Matrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}
