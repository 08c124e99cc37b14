//! Non-owning rectangular windows into a matrix buffer.
//!
//! A view borrows the slice that starts at its top-left element and spans
//! `(rows - 1) * stride + cols` elements, so every access is bounds checked
//! against the owner and no view can outlive it. Sub-views of a mutable view
//! reborrow it, which lets the recursive algorithms write the output
//! quadrants one after another without aliasing.

use std::ops::{Index, IndexMut};

use crate::counter::{self, Counter};
use crate::error::{ensure_shape, MatmulError, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Number of elements a `rows`×`cols` window with the given stride touches.
fn span(rows: usize, cols: usize, stride: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (rows - 1) * stride + cols
    }
}

/// Validates a sub-window request and returns the offset of its origin.
fn window_offset(
    parent: (usize, usize),
    stride: usize,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<usize> {
    let fits_rows = row.checked_add(rows).is_some_and(|end| end <= parent.0);
    let fits_cols = col.checked_add(cols).is_some_and(|end| end <= parent.1);
    if !fits_rows || !fits_cols {
        return Err(MatmulError::OutOfBounds {
            row,
            col,
            rows,
            cols,
            parent_rows: parent.0,
            parent_cols: parent.1,
        });
    }
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    Ok(row * stride + col)
}

fn check_layout(len: usize, rows: usize, cols: usize, stride: usize) -> Result<()> {
    if rows > 1 && stride < cols {
        return Err(MatmulError::ShapeMismatch {
            expected: (rows, cols),
            got: (rows, stride),
        });
    }
    let needed = span(rows, cols, stride);
    if len < needed {
        return Err(MatmulError::BufferSize {
            expected: needed,
            got: len,
        });
    }
    Ok(())
}

/// Read-only strided window.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T: Scalar> MatrixView<'a, T> {
    /// Wrap a row-major buffer whose rows are `stride` elements apart.
    ///
    /// # Errors
    /// Fails if `stride < cols` or the buffer is too short for the window.
    pub fn new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        check_layout(data.len(), rows, cols, stride)?;
        Ok(Self::from_parts(data, rows, cols, stride))
    }

    pub(crate) fn from_parts(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Self {
        let len = span(rows, cols, stride);
        MatrixView {
            data: &data[..len],
            rows,
            cols,
            stride,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element `(i, j)` by value.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    /// The `cols` elements of row `i`.
    pub fn row(&self, i: usize) -> &'a [T] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        if self.cols == 0 {
            return &[];
        }
        let start = i * self.stride;
        &self.data[start..start + self.cols]
    }

    /// A `rows`×`cols` window whose origin is `(row, col)` of this view.
    ///
    /// # Errors
    /// Returns `OutOfBounds` unless the window lies inside this view.
    pub fn subview(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        let offset = window_offset(self.shape(), self.stride, row, col, rows, cols)?;
        Ok(Self::from_parts(&self.data[offset..], rows, cols, self.stride))
    }

    /// The four `h`×`h` quadrants `[11, 12, 21, 22]` of a `2h`×`2h` view.
    pub fn quadrants(&self) -> Result<[Self; 4]> {
        let h = self.rows / 2;
        ensure_shape((2 * h, 2 * h), self.shape())?;
        Ok([
            self.subview(0, 0, h, h)?,
            self.subview(0, h, h, h)?,
            self.subview(h, 0, h, h)?,
            self.subview(h, h, h, h)?,
        ])
    }

    /// Copy the window into a new owned matrix.
    pub fn to_matrix(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for i in 0..self.rows {
            data.extend_from_slice(self.row(i));
        }
        // Length is rows * cols by construction.
        Matrix::from_vec(self.rows, self.cols, data).unwrap_or_default()
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} view",
            self.rows,
            self.cols
        );
        &self.data[i * self.stride + j]
    }
}

impl<'a, T: Scalar> From<&'a Matrix<T>> for MatrixView<'a, T> {
    fn from(m: &'a Matrix<T>) -> Self {
        m.view()
    }
}

/// Mutable strided window.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T: Scalar> MatrixViewMut<'a, T> {
    /// Wrap a mutable row-major buffer whose rows are `stride` elements apart.
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        check_layout(data.len(), rows, cols, stride)?;
        Ok(Self::from_parts(data, rows, cols, stride))
    }

    pub(crate) fn from_parts(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Self {
        let len = span(rows, cols, stride);
        MatrixViewMut {
            data: &mut data[..len],
            rows,
            cols,
            stride,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView::from_parts(&*self.data, self.rows, self.cols, self.stride)
    }

    /// Reborrow a `rows`×`cols` window whose origin is `(row, col)`.
    ///
    /// # Errors
    /// Returns `OutOfBounds` unless the window lies inside this view.
    pub fn subview_mut(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixViewMut<'_, T>> {
        let offset = window_offset(self.shape(), self.stride, row, col, rows, cols)?;
        Ok(MatrixViewMut::from_parts(
            &mut self.data[offset..],
            rows,
            cols,
            self.stride,
        ))
    }

    /// Mutable access to the `cols` elements of row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        if self.cols == 0 {
            return &mut [];
        }
        let start = i * self.stride;
        &mut self.data[start..start + self.cols]
    }

    pub fn fill_zero(&mut self) {
        for i in 0..self.rows {
            self.row_mut(i).fill(T::zero());
        }
    }

    /// Overwrite this window with `src`.
    pub fn copy_from(&mut self, src: MatrixView<'_, T>) -> Result<()> {
        ensure_shape(self.shape(), src.shape())?;
        for i in 0..self.rows {
            self.row_mut(i).copy_from_slice(src.row(i));
        }
        Ok(())
    }

    /// `self += src`, one counted addition per element.
    pub fn add_assign<C: Counter + ?Sized>(
        &mut self,
        src: MatrixView<'_, T>,
        cnt: &mut C,
    ) -> Result<()> {
        ensure_shape(self.shape(), src.shape())?;
        for i in 0..self.rows {
            for (d, &s) in self.row_mut(i).iter_mut().zip(src.row(i)) {
                *d = counter::add(*d, s, cnt);
            }
        }
        Ok(())
    }

    /// `self -= src`, one counted subtraction per element.
    pub fn sub_assign<C: Counter + ?Sized>(
        &mut self,
        src: MatrixView<'_, T>,
        cnt: &mut C,
    ) -> Result<()> {
        ensure_shape(self.shape(), src.shape())?;
        for i in 0..self.rows {
            for (d, &s) in self.row_mut(i).iter_mut().zip(src.row(i)) {
                *d = counter::sub(*d, s, cnt);
            }
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} view",
            self.rows,
            self.cols
        );
        &self.data[i * self.stride + j]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} view",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.stride + j]
    }
}

/// `out = a + b`.
pub fn add_into<T: Scalar, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: &mut MatrixViewMut<'_, T>,
    cnt: &mut C,
) -> Result<()> {
    ensure_shape(a.shape(), b.shape())?;
    ensure_shape(a.shape(), out.shape())?;
    for i in 0..a.rows() {
        let (ra, rb) = (a.row(i), b.row(i));
        for (j, d) in out.row_mut(i).iter_mut().enumerate() {
            *d = counter::add(ra[j], rb[j], cnt);
        }
    }
    Ok(())
}

/// `out = a - b`.
pub fn sub_into<T: Scalar, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: &mut MatrixViewMut<'_, T>,
    cnt: &mut C,
) -> Result<()> {
    ensure_shape(a.shape(), b.shape())?;
    ensure_shape(a.shape(), out.shape())?;
    for i in 0..a.rows() {
        let (ra, rb) = (a.row(i), b.row(i));
        for (j, d) in out.row_mut(i).iter_mut().enumerate() {
            *d = counter::sub(ra[j], rb[j], cnt);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{NoCounter, OpCounter};

    fn sample() -> Matrix<i32> {
        Matrix::from_vec(4, 4, (0..16).collect()).unwrap()
    }

    #[test]
    fn test_view_shape_and_access() {
        let m = sample();
        let v = m.view();
        assert_eq!(v.shape(), (4, 4));
        assert_eq!(v.stride(), 4);
        assert_eq!(v[(2, 3)], 11);
        assert_eq!(v.row(1), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_subview_keeps_parent_stride() {
        let m = sample();
        let s = m.view().subview(1, 2, 2, 2).unwrap();
        assert_eq!(s.shape(), (2, 2));
        assert_eq!(s.stride(), 4);
        assert_eq!(s.at(0, 0), 6);
        assert_eq!(s.at(1, 1), 11);

        let inner = s.subview(1, 0, 1, 2).unwrap();
        assert_eq!(inner.row(0), &[10, 11]);
    }

    #[test]
    #[should_panic(expected = "out of range for 2x2 view")]
    fn test_index_past_last_column_panics() {
        let m = sample();
        let s = m.view().subview(1, 0, 2, 2).unwrap();
        // (0, 2) still lies inside the parent row.
        let _ = s[(0, 2)];
    }

    #[test]
    #[should_panic(expected = "out of range for 2x2 view")]
    fn test_index_mut_past_last_column_panics() {
        let mut m = sample();
        let mut v = m.view_mut();
        let mut s = v.subview_mut(0, 0, 2, 2).unwrap();
        s[(1, 2)] = 0;
    }

    #[test]
    fn test_subview_out_of_bounds() {
        let m = sample();
        let err = m.view().subview(3, 0, 2, 1).unwrap_err();
        assert_eq!(
            err,
            MatmulError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 2,
                cols: 1,
                parent_rows: 4,
                parent_cols: 4
            }
        );
        assert!(m.view().subview(0, 4, 1, 1).is_err());
    }

    #[test]
    fn test_empty_subview_at_edge() {
        let m = sample();
        let e = m.view().subview(4, 4, 0, 0).unwrap();
        assert_eq!(e.shape(), (0, 0));
        assert_eq!(e.to_matrix().shape(), (0, 0));
    }

    #[test]
    fn test_quadrants() {
        let m = sample();
        let [q11, q12, q21, q22] = m.view().quadrants().unwrap();
        assert_eq!(q11.to_matrix().as_slice(), &[0, 1, 4, 5]);
        assert_eq!(q12.to_matrix().as_slice(), &[2, 3, 6, 7]);
        assert_eq!(q21.to_matrix().as_slice(), &[8, 9, 12, 13]);
        assert_eq!(q22.to_matrix().as_slice(), &[10, 11, 14, 15]);

        let odd = Matrix::<i32>::zeros(3, 3);
        assert!(odd.view().quadrants().is_err());
    }

    #[test]
    fn test_new_validates_layout() {
        let buf = [1.0f64; 11];
        assert!(MatrixView::new(&buf, 3, 3, 4).is_ok());
        assert!(MatrixView::new(&buf, 3, 3, 5).is_err());
        assert!(MatrixView::new(&buf, 2, 4, 3).is_err());
    }

    #[test]
    fn test_subview_mut_writes_through() {
        let mut m = Matrix::<i32>::zeros(3, 3);
        {
            let mut v = m.view_mut();
            let mut s = v.subview_mut(1, 1, 2, 2).unwrap();
            s[(0, 0)] = 5;
            s[(1, 1)] = 9;
            s.row_mut(0)[1] = 6;
        }
        assert_eq!(m.as_slice(), &[0, 0, 0, 0, 5, 6, 0, 0, 9]);
    }

    #[test]
    fn test_fill_zero_only_touches_window() {
        let mut m = Matrix::from_vec(2, 3, vec![1, 1, 1, 1, 1, 1]).unwrap();
        m.view_mut().subview_mut(0, 1, 2, 2).unwrap().fill_zero();
        assert_eq!(m.as_slice(), &[1, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_copy_from() {
        let src = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let mut dst = Matrix::<i32>::zeros(3, 3);
        dst.view_mut()
            .subview_mut(1, 0, 2, 2)
            .unwrap()
            .copy_from(src.view())
            .unwrap();
        assert_eq!(dst.as_slice(), &[0, 0, 0, 1, 2, 0, 3, 4, 0]);
        assert!(dst.view_mut().copy_from(src.view()).is_err());
    }

    #[test]
    fn test_add_sub_assign_count() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let mut c = Matrix::from_vec(2, 2, vec![10, 10, 10, 10]).unwrap();
        let mut cnt = OpCounter::new();
        c.view_mut().add_assign(a.view(), &mut cnt).unwrap();
        assert_eq!(c.as_slice(), &[11, 12, 13, 14]);
        c.view_mut().sub_assign(a.view(), &mut cnt).unwrap();
        c.view_mut().sub_assign(a.view(), &mut cnt).unwrap();
        assert_eq!(c.as_slice(), &[9, 8, 7, 6]);
        assert_eq!(cnt, OpCounter { mul: 0, add: 12 });
    }

    #[test]
    fn test_add_into_sub_into() {
        let m = sample();
        let [q11, q12, _, q22] = m.view().quadrants().unwrap();
        let mut out = Matrix::<i32>::zeros(2, 2);
        add_into(q11, q22, &mut out.view_mut(), &mut NoCounter).unwrap();
        assert_eq!(out.as_slice(), &[10, 12, 18, 20]);
        sub_into(q12, q11, &mut out.view_mut(), &mut NoCounter).unwrap();
        assert_eq!(out.as_slice(), &[2, 2, 2, 2]);

        let mut wrong = Matrix::<i32>::zeros(2, 3);
        assert!(add_into(q11, q22, &mut wrong.view_mut(), &mut NoCounter).is_err());
    }
}
