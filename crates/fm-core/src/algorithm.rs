use std::fmt;
use std::str::FromStr;

use crate::blocked::{self, BlockKernel};
use crate::counter::Counter;
use crate::error::{MatmulError, Result};
use crate::kernels::{alphaevolve, naive, strassen_4x4, winograd_4x4, KERNEL_SIZE};
use crate::matrix::Matrix;
use crate::scalar::ComplexLift;
use crate::strassen;

/// Every multiplication algorithm the crate provides, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Naive,
    Strassen,
    Strassen4x4,
    Winograd4x4,
    AlphaEvolve4x4,
    Blocked(BlockKernel),
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Naive,
        Algorithm::Strassen,
        Algorithm::Strassen4x4,
        Algorithm::Winograd4x4,
        Algorithm::AlphaEvolve4x4,
        Algorithm::Blocked(BlockKernel::Naive),
        Algorithm::Blocked(BlockKernel::Winograd),
        Algorithm::Blocked(BlockKernel::AlphaEvolve),
        Algorithm::Blocked(BlockKernel::Strassen),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Strassen => "strassen",
            Algorithm::Strassen4x4 => "strassen_4x4",
            Algorithm::Winograd4x4 => "winograd_4x4",
            Algorithm::AlphaEvolve4x4 => "alphaevolve_4x4",
            Algorithm::Blocked(BlockKernel::Naive) => "blocked_naive",
            Algorithm::Blocked(BlockKernel::Winograd) => "blocked_winograd",
            Algorithm::Blocked(BlockKernel::AlphaEvolve) => "blocked_alphaevolve",
            Algorithm::Blocked(BlockKernel::Strassen) => "blocked_strassen",
        }
    }

    /// True for the kernels that only accept 4x4 operands.
    pub fn is_fixed_size(&self) -> bool {
        matches!(
            self,
            Algorithm::Strassen4x4 | Algorithm::Winograd4x4 | Algorithm::AlphaEvolve4x4
        )
    }

    /// Whether `[rows, inner] @ [inner, cols]` is accepted.
    pub fn supports(&self, rows: usize, inner: usize, cols: usize) -> bool {
        if self.is_fixed_size() {
            rows == KERNEL_SIZE && inner == KERNEL_SIZE && cols == KERNEL_SIZE
        } else {
            true
        }
    }

    /// Runs the algorithm on owned operands and returns the product.
    pub fn multiply<T: ComplexLift, C: Counter + ?Sized>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cnt: &mut C,
    ) -> Result<Matrix<T>> {
        match self {
            Algorithm::Naive => naive::multiply(a, b, cnt),
            Algorithm::Strassen => strassen::multiply(a, b, cnt),
            Algorithm::Strassen4x4 => strassen_4x4::multiply(a, b, cnt),
            Algorithm::Winograd4x4 => winograd_4x4::multiply(a, b, cnt),
            Algorithm::AlphaEvolve4x4 => alphaevolve::multiply(a, b, cnt),
            Algorithm::Blocked(kernel) => blocked::multiply(a, b, *kernel, cnt),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MatmulError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| MatmulError::UnknownAlgorithm(s.to_string()))
    }
}
