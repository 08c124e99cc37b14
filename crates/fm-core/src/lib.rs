//! `fm-core` - Dense matrix multiplication kernels with operation counting.
//!
//! This crate provides:
//! - An owned row-major `Matrix` and borrowed strided `MatrixView` / `MatrixViewMut` windows
//! - A `Counter` trait threaded through every kernel for multiplication / addition counts
//! - Fixed 4x4 kernels: naive, Strassen, Winograd and a rank-48 complex scheme
//! - Recursive Strassen with power-of-two padding
//! - Block tiling that lifts any 4x4 kernel to arbitrary shapes
//! - An `Algorithm` selector that dispatches by name

pub mod algorithm;
pub mod blocked;
pub mod counter;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod scalar;
pub mod strassen;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use algorithm::Algorithm;
pub use blocked::{BlockKernel, TileStats, BLOCK_SIZE};
pub use counter::{Counter, NoCounter, OpCounter};
pub use error::{MatmulError, Result};
pub use kernels::KERNEL_SIZE;
pub use matrix::Matrix;
pub use scalar::{ComplexLift, Scalar};
pub use view::{MatrixView, MatrixViewMut};
