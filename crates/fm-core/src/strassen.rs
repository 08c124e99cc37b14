//! Recursive Strassen multiplication with power-of-two padding.
//!
//! Operands are zero-extended to the smallest power-of-two square that holds
//! every dimension, then halved recursively. A 4x4 problem goes to the fixed
//! Strassen-4x4 kernel and anything smaller to the naive loop; there is no
//! other cut-over threshold.
//!
//! Each recursion level allocates exactly three half-size scratch matrices
//! (two operand sums and one product) and reuses them for all seven products.
//! A product is folded into its output quadrants before the scratch space is
//! overwritten by the next one, so the statement order below is load-bearing.

use crate::counter::Counter;
use crate::error::{ensure_conformable, ensure_shape, Result};
use crate::kernels::{naive, strassen_4x4, KERNEL_SIZE};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::view::{add_into, sub_into, MatrixView, MatrixViewMut};

/// Problems at or below this side length stop recursing.
pub const BASE_SIZE: usize = KERNEL_SIZE;

/// Smallest power of two `>= n` (1 for `n == 0`).
pub fn next_pow2(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

#[derive(Debug, Clone, Copy)]
enum Quadrant {
    Q11,
    Q12,
    Q21,
    Q22,
}

impl Quadrant {
    fn origin(self, h: usize) -> (usize, usize) {
        match self {
            Quadrant::Q11 => (0, 0),
            Quadrant::Q12 => (0, h),
            Quadrant::Q21 => (h, 0),
            Quadrant::Q22 => (h, h),
        }
    }
}

/// `c[q] += p`.
fn fold_add<T: Scalar, C: Counter + ?Sized>(
    c: &mut MatrixViewMut<'_, T>,
    q: Quadrant,
    p: &Matrix<T>,
    cnt: &mut C,
) -> Result<()> {
    let h = p.rows();
    let (r0, c0) = q.origin(h);
    c.subview_mut(r0, c0, h, h)?.add_assign(p.view(), cnt)
}

/// `c[q] -= p`.
fn fold_sub<T: Scalar, C: Counter + ?Sized>(
    c: &mut MatrixViewMut<'_, T>,
    q: Quadrant,
    p: &Matrix<T>,
    cnt: &mut C,
) -> Result<()> {
    let h = p.rows();
    let (r0, c0) = q.origin(h);
    c.subview_mut(r0, c0, h, h)?.sub_assign(p.view(), cnt)
}

/// `c = a @ b` for `n`×`n` views.
///
/// `n` must halve evenly down to [`BASE_SIZE`] or below; any power of two
/// qualifies.
///
/// # Errors
/// Returns `ShapeMismatch` for non-square operands or an odd side above the
/// base size.
pub fn multiply_square_into<T: Scalar, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    c: &mut MatrixViewMut<'_, T>,
    cnt: &mut C,
) -> Result<()> {
    let n = a.rows();
    ensure_shape((n, n), a.shape())?;
    ensure_shape((n, n), b.shape())?;
    ensure_shape((n, n), c.shape())?;

    if n <= BASE_SIZE {
        return if n == BASE_SIZE {
            strassen_4x4::multiply_into(a, b, c, cnt)
        } else {
            naive::multiply_into(a, b, c, cnt)
        };
    }

    let [a11, a12, a21, a22] = a.quadrants()?;
    let [b11, b12, b21, b22] = b.quadrants()?;
    let h = n / 2;

    let mut s1 = Matrix::zeros(h, h);
    let mut s2 = Matrix::zeros(h, h);
    let mut p = Matrix::zeros(h, h);

    c.fill_zero();

    // M1 = (A11 + A22)(B11 + B22) -> C11, C22
    add_into(a11, a22, &mut s1.view_mut(), cnt)?;
    add_into(b11, b22, &mut s2.view_mut(), cnt)?;
    multiply_square_into(s1.view(), s2.view(), &mut p.view_mut(), cnt)?;
    fold_add(c, Quadrant::Q11, &p, cnt)?;
    fold_add(c, Quadrant::Q22, &p, cnt)?;

    // M2 = (A21 + A22) B11 -> C21, -C22
    add_into(a21, a22, &mut s1.view_mut(), cnt)?;
    multiply_square_into(s1.view(), b11, &mut p.view_mut(), cnt)?;
    fold_add(c, Quadrant::Q21, &p, cnt)?;
    fold_sub(c, Quadrant::Q22, &p, cnt)?;

    // M3 = A11 (B12 - B22) -> C12, C22
    sub_into(b12, b22, &mut s2.view_mut(), cnt)?;
    multiply_square_into(a11, s2.view(), &mut p.view_mut(), cnt)?;
    fold_add(c, Quadrant::Q12, &p, cnt)?;
    fold_add(c, Quadrant::Q22, &p, cnt)?;

    // M4 = A22 (B21 - B11) -> C11, C21
    sub_into(b21, b11, &mut s2.view_mut(), cnt)?;
    multiply_square_into(a22, s2.view(), &mut p.view_mut(), cnt)?;
    fold_add(c, Quadrant::Q11, &p, cnt)?;
    fold_add(c, Quadrant::Q21, &p, cnt)?;

    // M5 = (A11 + A12) B22 -> -C11, C12
    add_into(a11, a12, &mut s1.view_mut(), cnt)?;
    multiply_square_into(s1.view(), b22, &mut p.view_mut(), cnt)?;
    fold_sub(c, Quadrant::Q11, &p, cnt)?;
    fold_add(c, Quadrant::Q12, &p, cnt)?;

    // M6 = (A21 - A11)(B11 + B12) -> C22
    sub_into(a21, a11, &mut s1.view_mut(), cnt)?;
    add_into(b11, b12, &mut s2.view_mut(), cnt)?;
    multiply_square_into(s1.view(), s2.view(), &mut p.view_mut(), cnt)?;
    fold_add(c, Quadrant::Q22, &p, cnt)?;

    // M7 = (A12 - A22)(B21 + B22) -> C11
    sub_into(a12, a22, &mut s1.view_mut(), cnt)?;
    add_into(b21, b22, &mut s2.view_mut(), cnt)?;
    multiply_square_into(s1.view(), s2.view(), &mut p.view_mut(), cnt)?;
    fold_add(c, Quadrant::Q11, &p, cnt)?;

    Ok(())
}

/// `a @ b` for any conformable shapes.
///
/// Both operands are copied into zero-padded `n`×`n` buffers, where `n` is the
/// next power of two of the largest dimension; the top-left [r, c] window of
/// the padded product is returned.
pub fn multiply<T: Scalar, C: Counter + ?Sized>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cnt: &mut C,
) -> Result<Matrix<T>> {
    ensure_conformable(a.shape(), b.shape())?;
    let (r, k, c) = (a.rows(), a.cols(), b.cols());
    let n = next_pow2(r.max(k).max(c));

    let mut a_pad = Matrix::zeros(n, n);
    a_pad.view_mut().subview_mut(0, 0, r, k)?.copy_from(a.view())?;
    let mut b_pad = Matrix::zeros(n, n);
    b_pad.view_mut().subview_mut(0, 0, k, c)?.copy_from(b.view())?;

    let mut c_pad = Matrix::zeros(n, n);
    multiply_square_into(a_pad.view(), b_pad.view(), &mut c_pad.view_mut(), cnt)?;
    c_pad.submatrix(0, 0, r, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{NoCounter, OpCounter};
    use crate::error::MatmulError;
    use approx::assert_abs_diff_eq;

    fn ramp(rows: usize, cols: usize, seed: i64) -> Matrix<i64> {
        let data = (0..(rows * cols) as i64)
            .map(|x| (x * 31 + seed) % 19 - 9)
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn test_next_pow2() {
        assert_eq!(next_pow2(0), 1);
        assert_eq!(next_pow2(1), 1);
        assert_eq!(next_pow2(4), 4);
        assert_eq!(next_pow2(5), 8);
        assert_eq!(next_pow2(64), 64);
        assert_eq!(next_pow2(65), 128);
    }

    #[test]
    fn test_powers_of_two_match_naive() {
        for n in [1, 2, 4, 8, 16, 32] {
            let a = ramp(n, n, 3);
            let b = ramp(n, n, 7);
            let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
            assert_eq!(multiply(&a, &b, &mut NoCounter).unwrap(), expected, "n={n}");
        }
    }

    #[test]
    fn test_padding_round_trip() {
        for n in [3, 5, 6, 7, 9, 12] {
            let a = ramp(n, n, 1);
            let b = ramp(n, n, 2);
            let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
            let got = multiply(&a, &b, &mut NoCounter).unwrap();
            assert_eq!(got.shape(), (n, n));
            assert_eq!(got, expected, "n={n}");
        }
    }

    #[test]
    fn test_rectangular_operands() {
        let a = ramp(5, 3, 4);
        let b = ramp(3, 9, 5);
        let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
        let got = multiply(&a, &b, &mut NoCounter).unwrap();
        assert_eq!(got.shape(), (5, 9));
        assert_eq!(got, expected);
    }

    #[test]
    fn test_floats_within_tolerance() {
        let n = 16;
        let a = Matrix::from_vec(n, n, (0..n * n).map(|x| (x as f64 * 0.37).sin()).collect())
            .unwrap();
        let b = Matrix::from_vec(n, n, (0..n * n).map(|x| (x as f64 * 0.11).cos()).collect())
            .unwrap();
        let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
        let got = multiply(&a, &b, &mut NoCounter).unwrap();
        assert_abs_diff_eq!(got.max_abs_diff(&expected).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_multiplication_count_recurrence() {
        // 8x8 -> 7 calls of Strassen-4x4 at 56 each.
        let a = ramp(8, 8, 0);
        let mut cnt = OpCounter::new();
        multiply(&a, &a, &mut cnt).unwrap();
        assert_eq!(cnt.mul, 7 * 56);

        cnt.reset();
        let a = ramp(16, 16, 0);
        multiply(&a, &a, &mut cnt).unwrap();
        assert_eq!(cnt.mul, 49 * 56);
    }

    #[test]
    fn test_below_base_size_uses_naive() {
        let a = ramp(2, 2, 0);
        let mut cnt = OpCounter::new();
        multiply(&a, &a, &mut cnt).unwrap();
        assert_eq!(cnt.mul, 8);
    }

    #[test]
    fn test_square_into_rejects_odd_sizes_above_base() {
        let a = Matrix::<i32>::zeros(10, 10);
        let mut c = Matrix::<i32>::zeros(10, 10);
        let err = multiply_square_into(a.view(), a.view(), &mut c.view_mut(), &mut NoCounter);
        assert!(matches!(err, Err(MatmulError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::<f64>::zeros(3, 4);
        let b = Matrix::<f64>::zeros(3, 4);
        assert!(matches!(
            multiply(&a, &b, &mut NoCounter),
            Err(MatmulError::DimensionMismatch { .. })
        ));
    }
}
