//! Direct multiplication kernels.
//!
//! `naive` handles any conformable shape. The other kernels are fixed-size
//! bilinear algorithms for exactly 4x4 operands.

pub mod alphaevolve;
pub mod naive;
pub mod strassen_4x4;
pub mod winograd_4x4;

use crate::error::{ensure_shape, Result};

/// Side length of the fixed-size kernels.
pub const KERNEL_SIZE: usize = 4;

/// Fails with `ShapeMismatch` unless `shape` is `KERNEL_SIZE`×`KERNEL_SIZE`.
pub(crate) fn ensure_kernel_shape(shape: (usize, usize)) -> Result<()> {
    ensure_shape((KERNEL_SIZE, KERNEL_SIZE), shape)
}
