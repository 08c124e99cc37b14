//! Winograd's inner-product formula for a 4x4 product.
//!
//! With row terms `p[i] = -a[i][0]*a[i][1] - a[i][2]*a[i][3]` and column terms
//! `q[j] = -b[0][j]*b[1][j] - b[2][j]*b[3][j]`,
//!
//! ```text
//! c[i][j] = p[i] + q[j] + (a[i][0] + b[1][j]) * (a[i][1] + b[0][j])
//!                       + (a[i][2] + b[3][j]) * (a[i][3] + b[2][j])
//! ```
//!
//! Each correction term costs two products, so a call issues 8 + 8 + 16 * 2 = 48
//! multiplications. The identity needs a commutative element type.

use super::{ensure_kernel_shape, KERNEL_SIZE};
use crate::counter::{self, Counter};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::view::{MatrixView, MatrixViewMut};

/// `c = a @ b` for 4x4 operands.
///
/// # Errors
/// Returns `ShapeMismatch` if any operand is not 4x4.
pub fn multiply_into<T: Scalar, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    c: &mut MatrixViewMut<'_, T>,
    cnt: &mut C,
) -> Result<()> {
    ensure_kernel_shape(a.shape())?;
    ensure_kernel_shape(b.shape())?;
    ensure_kernel_shape(c.shape())?;

    let mut p = [T::zero(); KERNEL_SIZE];
    let mut q = [T::zero(); KERNEL_SIZE];

    for (i, pi) in p.iter_mut().enumerate() {
        let t1 = counter::mul(a[(i, 0)], a[(i, 1)], cnt);
        let t2 = counter::mul(a[(i, 2)], a[(i, 3)], cnt);
        *pi = counter::sub(counter::sub(T::zero(), t1, cnt), t2, cnt);
    }
    for (j, qj) in q.iter_mut().enumerate() {
        let t1 = counter::mul(b[(0, j)], b[(1, j)], cnt);
        let t2 = counter::mul(b[(2, j)], b[(3, j)], cnt);
        *qj = counter::sub(counter::sub(T::zero(), t1, cnt), t2, cnt);
    }

    for i in 0..KERNEL_SIZE {
        for j in 0..KERNEL_SIZE {
            let s1 = counter::add(a[(i, 0)], b[(1, j)], cnt);
            let s2 = counter::add(a[(i, 1)], b[(0, j)], cnt);
            let m1 = counter::mul(s1, s2, cnt);

            let s3 = counter::add(a[(i, 2)], b[(3, j)], cnt);
            let s4 = counter::add(a[(i, 3)], b[(2, j)], cnt);
            let m2 = counter::mul(s3, s4, cnt);

            let acc = counter::add(p[i], q[j], cnt);
            let acc = counter::add(acc, m1, cnt);
            c[(i, j)] = counter::add(acc, m2, cnt);
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
    let mut c = Matrix::zeros(KERNEL_SIZE, KERNEL_SIZE);
    multiply_into(a.view(), b.view(), &mut c.view_mut(), cnt)?;
    Ok(c)
}
