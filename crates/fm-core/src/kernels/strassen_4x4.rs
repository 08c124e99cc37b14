//! Strassen's seven-product scheme applied once to a 4x4 product.
//!
//! Each operand is split into 2x2 blocks; the seven block products are done
//! with the naive 2x2 loop, so the kernel issues 7 * 8 = 56 multiplications.

use super::ensure_kernel_shape;
use crate::counter::{self, Counter};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::view::{MatrixView, MatrixViewMut};

type Block<T> = [[T; 2]; 2];

fn load<T: Scalar>(v: &MatrixView<'_, T>, r0: usize, c0: usize) -> Block<T> {
    [
        [v[(r0, c0)], v[(r0, c0 + 1)]],
        [v[(r0 + 1, c0)], v[(r0 + 1, c0 + 1)]],
    ]
}

fn store<T: Scalar>(c: &mut MatrixViewMut<'_, T>, r0: usize, c0: usize, blk: &Block<T>) {
    for (i, row) in blk.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            c[(r0 + i, c0 + j)] = x;
        }
    }
}

fn add2<T: Scalar, C: Counter + ?Sized>(x: &Block<T>, y: &Block<T>, cnt: &mut C) -> Block<T> {
    let mut out = [[T::zero(); 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = counter::add(x[i][j], y[i][j], cnt);
        }
    }
    out
}

fn sub2<T: Scalar, C: Counter + ?Sized>(x: &Block<T>, y: &Block<T>, cnt: &mut C) -> Block<T> {
    let mut out = [[T::zero(); 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = counter::sub(x[i][j], y[i][j], cnt);
        }
    }
    out
}

/// Naive 2x2 product: 8 multiplications, 8 additions.
fn mul2<T: Scalar, C: Counter + ?Sized>(x: &Block<T>, y: &Block<T>, cnt: &mut C) -> Block<T> {
    let mut out = [[T::zero(); 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            let mut sum = T::zero();
            for k in 0..2 {
                sum = counter::add(sum, counter::mul(x[i][k], y[k][j], cnt), cnt);
            }
            out[i][j] = sum;
        }
    }
    out
}

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

    let (a11, a12, a21, a22) = (load(&a, 0, 0), load(&a, 0, 2), load(&a, 2, 0), load(&a, 2, 2));
    let (b11, b12, b21, b22) = (load(&b, 0, 0), load(&b, 0, 2), load(&b, 2, 0), load(&b, 2, 2));

    // P1 = A11 (B12 - B22)
    let s = sub2(&b12, &b22, cnt);
    let p1 = mul2(&a11, &s, cnt);

    // P2 = (A11 + A12) B22
    let s = add2(&a11, &a12, cnt);
    let p2 = mul2(&s, &b22, cnt);

    // P3 = (A21 + A22) B11
    let s = add2(&a21, &a22, cnt);
    let p3 = mul2(&s, &b11, cnt);

    // P4 = A22 (B21 - B11)
    let s = sub2(&b21, &b11, cnt);
    let p4 = mul2(&a22, &s, cnt);

    // P5 = (A11 + A22)(B11 + B22)
    let s = add2(&a11, &a22, cnt);
    let t = add2(&b11, &b22, cnt);
    let p5 = mul2(&s, &t, cnt);

    // P6 = (A12 - A22)(B21 + B22)
    let s = sub2(&a12, &a22, cnt);
    let t = add2(&b21, &b22, cnt);
    let p6 = mul2(&s, &t, cnt);

    // P7 = (A11 - A21)(B11 + B12)
    let s = sub2(&a11, &a21, cnt);
    let t = add2(&b11, &b12, cnt);
    let p7 = mul2(&s, &t, cnt);

    // C11 = P5 + P4 - P2 + P6
    let acc = add2(&p5, &p4, cnt);
    let acc = sub2(&acc, &p2, cnt);
    store(c, 0, 0, &add2(&acc, &p6, cnt));

    // C12 = P1 + P2
    store(c, 0, 2, &add2(&p1, &p2, cnt));

    // C21 = P3 + P4
    store(c, 2, 0, &add2(&p3, &p4, cnt));

    // C22 = P5 + P1 - P3 - P7
    let acc = add2(&p5, &p1, cnt);
    let acc = sub2(&acc, &p3, cnt);
    store(c, 2, 2, &sub2(&acc, &p7, cnt));

    Ok(())
}

/// Allocating form of [`multiply_into`].
pub fn multiply<T: Scalar, C: Counter + ?Sized>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cnt: &mut C,
) -> Result<Matrix<T>> {
    let mut c = Matrix::zeros(4, 4);
    multiply_into(a.view(), b.view(), &mut c.view_mut(), cnt)?;
    Ok(c)
}
