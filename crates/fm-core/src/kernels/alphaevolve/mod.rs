//! Rank-48 bilinear 4x4x4 multiplication over the complex numbers.
//!
//! The scheme was found by search rather than derived by hand. Both operands
//! are lifted to `Complex64`, 48 linear forms are taken of each
//! ([`coefficients::LHS`], [`coefficients::RHS`]), the forms are multiplied
//! pairwise, and every output cell is a linear form over the 48 products
//! ([`coefficients::OUT`]). For real inputs the imaginary part of each cell
//! cancels and is dropped; for complex inputs the full value is kept.
//!
//! Only the 48 pairwise products are counted as multiplications. Scaling by a
//! table coefficient is not counted; each term folded into a linear form
//! beyond the first counts one addition.

pub mod coefficients;

use num_complex::Complex64;

use self::coefficients::{Coeff, LHS, OUT, RANK, RHS};
use super::{ensure_kernel_shape, KERNEL_SIZE};
use crate::counter::{self, Counter};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::ComplexLift;
use crate::view::{MatrixView, MatrixViewMut};

const CELLS: usize = KERNEL_SIZE * KERNEL_SIZE;

/// Evaluates `sum(coeffs[t] * values[t])` over the non-zero coefficients.
fn linear_form<C: Counter + ?Sized>(coeffs: &[Coeff], values: &[Complex64], cnt: &mut C) -> Complex64 {
    let mut acc: Option<Complex64> = None;
    for (c, &v) in coeffs.iter().zip(values) {
        if c.is_zero() {
            continue;
        }
        let term = c.value() * v;
        acc = Some(match acc {
            None => term,
            Some(sum) => counter::add(sum, term, cnt),
        });
    }
    acc.unwrap_or_default()
}

fn lift<T: ComplexLift>(v: &MatrixView<'_, T>) -> [Complex64; CELLS] {
    let mut out = [Complex64::default(); CELLS];
    for i in 0..KERNEL_SIZE {
        for j in 0..KERNEL_SIZE {
            out[i * KERNEL_SIZE + j] = v[(i, j)].to_complex();
        }
    }
    out
}

/// The 16 recombined complex values, row-major, before the real part is
/// taken.
///
/// # Errors
/// Returns `ShapeMismatch` if either operand is not 4x4.
pub fn lift_products<T: ComplexLift, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    cnt: &mut C,
) -> Result<[Complex64; CELLS]> {
    ensure_kernel_shape(a.shape())?;
    ensure_kernel_shape(b.shape())?;

    let a_vals = lift(&a);
    let b_vals = lift(&b);

    let mut products = [Complex64::default(); RANK];
    for (t, m) in products.iter_mut().enumerate() {
        let lhs = linear_form(&LHS[t], &a_vals, cnt);
        let rhs = linear_form(&RHS[t], &b_vals, cnt);
        *m = counter::mul(lhs, rhs, cnt);
    }

    let mut cells = [Complex64::default(); CELLS];
    for (cell, row) in cells.iter_mut().zip(OUT.iter()) {
        *cell = linear_form(row, &products, cnt);
    }
    Ok(cells)
}

/// `c = a @ b` for 4x4 operands using 48 multiplications.
///
/// # Errors
/// Returns `ShapeMismatch` if any operand is not 4x4.
pub fn multiply_into<T: ComplexLift, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    c: &mut MatrixViewMut<'_, T>,
    cnt: &mut C,
) -> Result<()> {
    ensure_kernel_shape(c.shape())?;
    let cells = lift_products(a, b, cnt)?;
    for i in 0..KERNEL_SIZE {
        for j in 0..KERNEL_SIZE {
            c[(i, j)] = T::from_complex(cells[i * KERNEL_SIZE + j]);
        }
    }
    Ok(())
}

/// Allocating form of [`multiply_into`].
pub fn multiply<T: ComplexLift, C: Counter + ?Sized>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cnt: &mut C,
) -> Result<Matrix<T>> {
    let mut c = Matrix::zeros(KERNEL_SIZE, KERNEL_SIZE);
    multiply_into(a.view(), b.view(), &mut c.view_mut(), cnt)?;
    Ok(c)
}
