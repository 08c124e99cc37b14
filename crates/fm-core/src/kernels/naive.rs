use crate::counter::{self, Counter};
use crate::error::{ensure_conformable, ensure_shape, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::view::{MatrixView, MatrixViewMut};

/// `c = a @ b` by the triple loop.
///
/// `a` is [r, k], `b` is [k, c] and `c` must already be [r, c]. Every inner
/// step costs one counted multiplication and one counted addition.
pub fn multiply_into<T: Scalar, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    c: &mut MatrixViewMut<'_, T>,
    cnt: &mut C,
) -> Result<()> {
    ensure_conformable(a.shape(), b.shape())?;
    ensure_shape((a.rows(), b.cols()), c.shape())?;

    for i in 0..a.rows() {
        let a_row = a.row(i);
        for j in 0..b.cols() {
            let mut sum = T::zero();
            for (p, &x) in a_row.iter().enumerate() {
                sum = counter::add(sum, counter::mul(x, b[(p, j)], cnt), cnt);
            }
            c[(i, j)] = sum;
        }
    }
    Ok(())
}

/// Allocating form of [`multiply_into`].
pub fn multiply<T: Scalar, C: Counter + ?Sized>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cnt: &mut C,
) -> Result<Matrix<T>> {
    ensure_conformable(a.shape(), b.shape())?;
    let mut c = Matrix::zeros(a.rows(), b.cols());
    multiply_into(a.view(), b.view(), &mut c.view_mut(), cnt)?;
    Ok(c)
}
