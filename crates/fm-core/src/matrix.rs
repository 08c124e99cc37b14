use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::One;

use crate::error::{ensure_shape, MatmulError, Result};
use crate::scalar::{ComplexLift, Scalar};
use crate::view::{MatrixView, MatrixViewMut};

/// An owned, dense, row-major matrix.
///
/// Invariant: `data.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `BufferSize` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatmulError::BufferSize {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Create a matrix from a list of equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            ensure_shape((rows.len(), cols), (rows.len(), row.len()))?;
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// The `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self
    where
        T: One,
    {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Reallocate to `rows`×`cols`, discarding the contents and zero-filling.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, T::zero());
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row stride of the backing buffer; always equal to `cols`.
    pub fn stride(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the element at `(i, j)`, or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// A read-only view of the whole matrix.
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::from_parts(&self.data, self.rows, self.cols, self.cols)
    }

    /// A mutable view of the whole matrix.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut::from_parts(&mut self.data, self.rows, self.cols, self.cols)
    }

    /// Copy out a `rows`×`cols` window starting at `(row, col)`.
    pub fn submatrix(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        Ok(self.view().subview(row, col, rows, cols)?.to_matrix())
    }

    /// Largest element-wise `|self - other|`.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix<T>) -> Result<f64>
    where
        T: ComplexLift,
    {
        ensure_shape(self.shape(), other.shape())?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&x, &y)| (x.to_complex() - y.to_complex()).norm())
            .fold(0.0, f64::max))
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::zeros(0, 0)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

/// Row-major, space separated, one row per line.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{} ", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
