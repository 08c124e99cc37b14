use fm_core::kernels::{alphaevolve, naive, strassen_4x4, winograd_4x4};
use fm_core::{blocked, strassen};
use fm_core::{Algorithm, BlockKernel, Matrix, NoCounter, OpCounter};
use num_complex::Complex64;
use proptest::prelude::*;

type KernelFn = fn(&Matrix<f64>, &Matrix<f64>, &mut OpCounter) -> fm_core::Result<Matrix<f64>>;

fn assert_close(expected: &Matrix<f64>, actual: &Matrix<f64>, tol: f64, name: &str) {
    assert_eq!(expected.shape(), actual.shape(), "{name}: shape mismatch");
    for (i, (e, a)) in expected.as_slice().iter().zip(actual.as_slice()).enumerate() {
        assert!(
            (e - a).abs() < tol,
            "{name}: mismatch at index {i}: expected {e}, got {a}"
        );
    }
}

fn wave(rows: usize, cols: usize, phase: f64) -> Matrix<f64> {
    let data = (0..rows * cols)
        .map(|x| (x as f64 * 0.731 + phase).sin())
        .collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn int_grid(rows: usize, cols: usize, seed: i64) -> Matrix<i64> {
    let data = (0..(rows * cols) as i64)
        .map(|x| (x * 17 + seed * 5) % 23 - 11)
        .collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn complex_grid(rows: usize, cols: usize, phase: f64) -> Matrix<Complex64> {
    let data = (0..rows * cols)
        .map(|x| {
            let t = x as f64 + phase;
            Complex64::new((t * 0.41).cos(), (t * 0.29).sin())
        })
        .collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn test_2x2_examples() {
    let i = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]]).unwrap();
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    assert_eq!(naive::multiply(&i, &b, &mut NoCounter).unwrap(), b);

    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let expected = Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]).unwrap();
    for alg in [
        Algorithm::Naive,
        Algorithm::Strassen,
        Algorithm::Blocked(BlockKernel::Winograd),
    ] {
        assert_eq!(alg.multiply(&a, &b, &mut NoCounter).unwrap(), expected, "{alg}");
    }
}

#[test]
fn test_identity_and_zero_for_fixed_kernels() {
    let id = Matrix::<f64>::identity(4);
    let zero = Matrix::<f64>::zeros(4, 4);
    let b = wave(4, 4, 0.3);
    for alg in Algorithm::ALL.into_iter().filter(Algorithm::is_fixed_size) {
        let got = alg.multiply(&id, &b, &mut NoCounter).unwrap();
        assert_close(&b, &got, 1e-12, alg.name());
        let got = alg.multiply(&zero, &b, &mut NoCounter).unwrap();
        assert_close(&zero, &got, 1e-12, alg.name());
    }
}

#[test]
fn test_exact_multiplication_counts() {
    let a = wave(4, 4, 0.0);
    let b = wave(4, 4, 1.0);
    let cases: [(&str, KernelFn, u64); 4] = [
        ("naive", naive::multiply, 64),
        ("strassen_4x4", strassen_4x4::multiply, 56),
        ("winograd_4x4", winograd_4x4::multiply, 48),
        ("alphaevolve_4x4", alphaevolve::multiply, 48),
    ];
    for (name, f, muls) in cases {
        let mut cnt = OpCounter::new();
        f(&a, &b, &mut cnt).unwrap();
        assert_eq!(cnt.mul, muls, "{name}");
    }
}

#[test]
fn test_counts_are_data_independent() {
    let zero = Matrix::<f64>::zeros(8, 8);
    let dense = wave(8, 8, 2.0);
    for alg in Algorithm::ALL.into_iter().filter(|x| !x.is_fixed_size()) {
        let mut c0 = OpCounter::new();
        let mut c1 = OpCounter::new();
        alg.multiply(&zero, &zero, &mut c0).unwrap();
        alg.multiply(&dense, &dense, &mut c1).unwrap();
        assert_eq!(c0, c1, "{alg}");
    }
}

// ============================================================
// Cross-algorithm equivalence
// ============================================================

#[test]
fn test_real_equivalence_across_sizes() {
    for n in [4, 8, 16, 32] {
        let a = wave(n, n, 0.1);
        let b = wave(n, n, 0.9);
        let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
        for alg in Algorithm::ALL.into_iter().filter(|x| x.supports(n, n, n)) {
            let got = alg.multiply(&a, &b, &mut NoCounter).unwrap();
            assert_close(&expected, &got, 1e-9, &format!("{alg} n={n}"));
        }
    }
}

#[test]
fn test_complex_equivalence() {
    let a = complex_grid(12, 12, 0.0);
    let b = complex_grid(12, 12, 3.0);
    let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
    for alg in Algorithm::ALL.into_iter().filter(|x| x.supports(12, 12, 12)) {
        let got = alg.multiply(&a, &b, &mut NoCounter).unwrap();
        assert!(got.max_abs_diff(&expected).unwrap() < 1e-9, "{alg}");
    }
}

#[test]
fn test_integer_equivalence_is_exact() {
    let a = int_grid(16, 16, 1);
    let b = int_grid(16, 16, 2);
    let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
    for alg in Algorithm::ALL.into_iter().filter(|x| x.supports(16, 16, 16)) {
        assert_eq!(alg.multiply(&a, &b, &mut NoCounter).unwrap(), expected, "{alg}");
    }
}

// ============================================================
// Padding and tiling
// ============================================================

#[test]
fn test_strassen_padding_for_non_powers_of_two() {
    for n in [5, 6, 7] {
        let a = int_grid(n, n, 3);
        let b = int_grid(n, n, 4);
        let got = strassen::multiply(&a, &b, &mut NoCounter).unwrap();
        assert_eq!(got.shape(), (n, n));
        assert_eq!(got, naive::multiply(&a, &b, &mut NoCounter).unwrap(), "n={n}");
    }
}

#[test]
fn test_blocked_boundary_tiles() {
    let a = wave(5, 6, 0.5);
    let b = wave(6, 7, 1.5);
    let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
    for kernel in BlockKernel::ALL {
        let mut c = Matrix::zeros(5, 7);
        let stats =
            blocked::multiply_into(a.view(), b.view(), &mut c.view_mut(), kernel, &mut NoCounter)
                .unwrap();
        assert!(stats.ragged_tiles > 0);
        assert_close(&expected, &c, 1e-9, kernel.name());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Every general algorithm agrees with the naive loop on integer operands.
    #[test]
    fn general_algorithms_match_naive(
        (r, k, c, a, b) in (1usize..11, 1usize..11, 1usize..11).prop_flat_map(|(r, k, c)| {
            (
                Just(r),
                Just(k),
                Just(c),
                proptest::collection::vec(-9i64..=9, r * k),
                proptest::collection::vec(-9i64..=9, k * c),
            )
        })
    ) {
        let a = Matrix::from_vec(r, k, a).unwrap();
        let b = Matrix::from_vec(k, c, b).unwrap();
        let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
        for alg in Algorithm::ALL.into_iter().filter(|x| x.supports(r, k, c)) {
            let got = alg.multiply(&a, &b, &mut NoCounter).unwrap();
            prop_assert_eq!(&got, &expected, "{}", alg);
        }
    }
}
