//! Seeded test-matrix generators.
//!
//! Every generator builds its own `StdRng` from the seed, so the same seed
//! always yields the same matrix. Pairs use `seed` for A and `seed + 1` for B.

use std::fmt;
use std::str::FromStr;

use fm_core::{Matrix, Scalar};
use half::f16;
use num_complex::{Complex32, Complex64};
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{BenchError, Result};

/// Element types that can be drawn uniformly from a value range.
pub trait SampleScalar: Scalar {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self;
}

impl SampleScalar for f64 {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self {
        rng.gen_range(range.lo..range.hi)
    }
}

impl SampleScalar for f32 {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self {
        f64::sample(rng, range) as f32
    }
}

impl SampleScalar for f16 {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self {
        f16::from_f64(f64::sample(rng, range))
    }
}

/// Integers are drawn from the closed range with both bounds truncated.
impl SampleScalar for i64 {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self {
        rng.gen_range(range.lo as i64..=range.hi as i64)
    }
}

impl SampleScalar for i32 {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self {
        rng.gen_range(range.lo as i32..=range.hi as i32)
    }
}

/// Real and imaginary parts are independent draws.
impl SampleScalar for Complex64 {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self {
        let re = f64::sample(rng, range);
        let im = f64::sample(rng, range);
        Complex64::new(re, im)
    }
}

impl SampleScalar for Complex32 {
    fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> Self {
        let re = f32::sample(rng, range);
        let im = f32::sample(rng, range);
        Complex32::new(re, im)
    }
}

/// Half-open value range `[lo, hi)` for generated elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    lo: f64,
    hi: f64,
}

impl ValueRange {
    /// # Errors
    /// Returns `InvalidConfig` unless both bounds are finite and `lo < hi`.
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(BenchError::InvalidConfig(format!(
                "value range [{lo}, {hi}) is empty or not finite"
            )));
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { lo: -1.0, hi: 1.0 }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lo, self.hi)
    }
}

/// Structure of a generated test matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    Random,
    Symmetric,
    Sparse,
}

impl MatrixKind {
    pub const ALL: [MatrixKind; 3] = [MatrixKind::Random, MatrixKind::Symmetric, MatrixKind::Sparse];

    pub fn name(&self) -> &'static str {
        match self {
            MatrixKind::Random => "random",
            MatrixKind::Symmetric => "symmetric",
            MatrixKind::Sparse => "sparse",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        MatrixKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| BenchError::InvalidConfig(format!("unknown matrix kind: {s}")))
    }
}

/// Dense matrix with every element drawn independently.
pub fn random<T: SampleScalar>(rows: usize, cols: usize, seed: u64, range: ValueRange) -> Matrix<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::zeros(rows, cols);
    for x in m.as_mut_slice() {
        *x = T::sample(&mut rng, range);
    }
    m
}

/// `n`×`n` matrix with `m[i][j] == m[j][i]`; the upper triangle is drawn
/// row by row and mirrored.
pub fn symmetric<T: SampleScalar>(n: usize, seed: u64, range: ValueRange) -> Matrix<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let x = T::sample(&mut rng, range);
            m[(i, j)] = x;
            m[(j, i)] = x;
        }
    }
    m
}

/// Each element is zero with probability `p_zero`, otherwise drawn from
/// `range`.
///
/// # Errors
/// Returns `InvalidConfig` if `p_zero` is not a probability.
pub fn sparse<T: SampleScalar>(
    rows: usize,
    cols: usize,
    p_zero: f64,
    seed: u64,
    range: ValueRange,
) -> Result<Matrix<T>> {
    let zero = Bernoulli::new(p_zero).map_err(|_| {
        BenchError::InvalidConfig(format!("zero probability {p_zero} is outside [0, 1]"))
    })?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::zeros(rows, cols);
    for x in m.as_mut_slice() {
        if !zero.sample(&mut rng) {
            *x = T::sample(&mut rng, range);
        }
    }
    Ok(m)
}

/// Operand pair `(A, B)` of size `n`×`n`, from seeds `seed` and `seed + 1`.
pub fn generate_pair<T: SampleScalar>(
    kind: MatrixKind,
    n: usize,
    seed: u64,
    range: ValueRange,
    p_zero: f64,
) -> Result<(Matrix<T>, Matrix<T>)> {
    let next = seed.wrapping_add(1);
    Ok(match kind {
        MatrixKind::Random => (random(n, n, seed, range), random(n, n, next, range)),
        MatrixKind::Symmetric => (symmetric(n, seed, range), symmetric(n, next, range)),
        MatrixKind::Sparse => (
            sparse(n, n, p_zero, seed, range)?,
            sparse(n, n, p_zero, next, range)?,
        ),
    })
}
