//! Block tiling: any fixed-size kernel lifted to arbitrary shapes.
//!
//! `C[bi, bj] = sum_bp A[bi, bp] @ B[bp, bj]` over `BLOCK_SIZE` tiles. Full
//! tiles go to the selected kernel; tiles cut short by the matrix edge fall
//! back to the naive loop. Each tile product lands in a zeroed scratch tile
//! and is then added into the output, which is zeroed up front.

use std::fmt;
use std::str::FromStr;

use crate::counter::Counter;
use crate::error::{ensure_conformable, ensure_shape, MatmulError, Result};
use crate::kernels::{alphaevolve, naive, strassen_4x4, winograd_4x4, KERNEL_SIZE};
use crate::matrix::Matrix;
use crate::scalar::ComplexLift;
use crate::view::{MatrixView, MatrixViewMut};

/// Tile side length; the native size of the fixed kernels.
pub const BLOCK_SIZE: usize = KERNEL_SIZE;

/// Kernel used for full tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockKernel {
    #[default]
    Naive,
    Winograd,
    AlphaEvolve,
    Strassen,
}

impl BlockKernel {
    pub const ALL: [BlockKernel; 4] = [
        BlockKernel::Naive,
        BlockKernel::Winograd,
        BlockKernel::AlphaEvolve,
        BlockKernel::Strassen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlockKernel::Naive => "naive",
            BlockKernel::Winograd => "winograd",
            BlockKernel::AlphaEvolve => "alphaevolve",
            BlockKernel::Strassen => "strassen",
        }
    }

    /// Multiply one full tile.
    pub fn multiply_tile<T: ComplexLift, C: Counter + ?Sized>(
        &self,
        a: MatrixView<'_, T>,
        b: MatrixView<'_, T>,
        c: &mut MatrixViewMut<'_, T>,
        cnt: &mut C,
    ) -> Result<()> {
        match self {
            BlockKernel::Naive => naive::multiply_into(a, b, c, cnt),
            BlockKernel::Winograd => winograd_4x4::multiply_into(a, b, c, cnt),
            BlockKernel::AlphaEvolve => alphaevolve::multiply_into(a, b, c, cnt),
            BlockKernel::Strassen => strassen_4x4::multiply_into(a, b, c, cnt),
        }
    }
}

impl fmt::Display for BlockKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKernel {
    type Err = MatmulError;

    fn from_str(s: &str) -> Result<Self> {
        BlockKernel::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| MatmulError::UnknownAlgorithm(s.to_string()))
    }
}

/// How many `(bi, bj, bp)` tile products took each path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileStats {
    pub full_tiles: usize,
    pub ragged_tiles: usize,
}

/// `c = a @ b` by tiling, for `a` [m, k], `b` [k, n] and `c` [m, n].
pub fn multiply_into<T: ComplexLift, C: Counter + ?Sized>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    c: &mut MatrixViewMut<'_, T>,
    kernel: BlockKernel,
    cnt: &mut C,
) -> Result<TileStats> {
    ensure_conformable(a.shape(), b.shape())?;
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    ensure_shape((m, n), c.shape())?;

    c.fill_zero();

    let blocks_m = m.div_ceil(BLOCK_SIZE);
    let blocks_k = k.div_ceil(BLOCK_SIZE);
    let blocks_n = n.div_ceil(BLOCK_SIZE);

    let mut stats = TileStats::default();
    let mut tile = Matrix::zeros(BLOCK_SIZE, BLOCK_SIZE);

    for bi in 0..blocks_m {
        let row0 = bi * BLOCK_SIZE;
        let rows = BLOCK_SIZE.min(m - row0);
        for bj in 0..blocks_n {
            let col0 = bj * BLOCK_SIZE;
            let cols = BLOCK_SIZE.min(n - col0);
            for bp in 0..blocks_k {
                let inner0 = bp * BLOCK_SIZE;
                let inner = BLOCK_SIZE.min(k - inner0);

                let a_tile = a.subview(row0, inner0, rows, inner)?;
                let b_tile = b.subview(inner0, col0, inner, cols)?;

                tile.resize(rows, cols);
                let full = rows == BLOCK_SIZE && inner == BLOCK_SIZE && cols == BLOCK_SIZE;
                if full {
                    kernel.multiply_tile(a_tile, b_tile, &mut tile.view_mut(), cnt)?;
                    stats.full_tiles += 1;
                } else {
                    naive::multiply_into(a_tile, b_tile, &mut tile.view_mut(), cnt)?;
                    stats.ragged_tiles += 1;
                }

                c.subview_mut(row0, col0, rows, cols)?
                    .add_assign(tile.view(), cnt)?;
            }
        }
    }
    Ok(stats)
}

/// Allocating form of [`multiply_into`].
pub fn multiply<T: ComplexLift, C: Counter + ?Sized>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    kernel: BlockKernel,
    cnt: &mut C,
) -> Result<Matrix<T>> {
    ensure_conformable(a.shape(), b.shape())?;
    let mut c = Matrix::zeros(a.rows(), b.cols());
    multiply_into(a.view(), b.view(), &mut c.view_mut(), kernel, cnt)?;
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{NoCounter, OpCounter};
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    fn grid(rows: usize, cols: usize, scale: f64) -> Matrix<f64> {
        let data = (0..rows * cols)
            .map(|x| ((x as f64) * scale).sin())
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn test_kernel_names_round_trip() {
        for k in BlockKernel::ALL {
            assert_eq!(k.name().parse::<BlockKernel>().unwrap(), k);
            assert_eq!(k.to_string(), k.name());
        }
        assert_eq!(
            "blas".parse::<BlockKernel>(),
            Err(MatmulError::UnknownAlgorithm("blas".to_string()))
        );
    }

    #[test]
    fn test_every_kernel_matches_naive_on_ragged_shape() {
        let a = grid(5, 6, 0.3);
        let b = grid(6, 7, 0.7);
        let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
        for kernel in BlockKernel::ALL {
            let got = multiply(&a, &b, kernel, &mut NoCounter).unwrap();
            assert_abs_diff_eq!(got.max_abs_diff(&expected).unwrap(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tile_stats_for_ragged_shape() {
        let a = grid(5, 6, 0.3);
        let b = grid(6, 7, 0.7);
        let mut c = Matrix::zeros(5, 7);
        let stats =
            multiply_into(a.view(), b.view(), &mut c.view_mut(), BlockKernel::Winograd, &mut NoCounter)
                .unwrap();
        // 2 x 2 x 2 tile products; only (0, 0, 0) is a full 4x4x4 tile.
        assert_eq!(stats, TileStats { full_tiles: 1, ragged_tiles: 7 });
    }

    #[test]
    fn test_aligned_shape_uses_kernel_everywhere() {
        let a = grid(8, 12, 0.2);
        let b = grid(12, 4, 0.9);
        let mut c = Matrix::zeros(8, 4);
        let stats =
            multiply_into(a.view(), b.view(), &mut c.view_mut(), BlockKernel::Strassen, &mut NoCounter)
                .unwrap();
        assert_eq!(stats, TileStats { full_tiles: 2 * 3, ragged_tiles: 0 });
    }

    #[test]
    fn test_op_counts_on_single_tile() {
        let a = grid(4, 4, 0.5);
        let b = grid(4, 4, 0.25);
        for (kernel, muls) in [
            (BlockKernel::Naive, 64),
            (BlockKernel::Winograd, 48),
            (BlockKernel::AlphaEvolve, 48),
            (BlockKernel::Strassen, 56),
        ] {
            let mut cnt = OpCounter::new();
            multiply(&a, &b, kernel, &mut cnt).unwrap();
            assert_eq!(cnt.mul, muls, "{kernel}");
        }
    }

    #[test]
    fn test_output_is_overwritten() {
        let a = Matrix::<i64>::identity(4);
        let b = Matrix::from_vec(4, 4, (0..16).collect()).unwrap();
        let mut c = Matrix::from_vec(4, 4, vec![100; 16]).unwrap();
        multiply_into(a.view(), b.view(), &mut c.view_mut(), BlockKernel::Naive, &mut NoCounter)
            .unwrap();
        assert_eq!(c, b);
    }

    #[test]
    fn test_complex_operands() {
        let a = Matrix::from_vec(6, 5, (0..30).map(|x| Complex64::new(x as f64, 1.0)).collect())
            .unwrap();
        let b = Matrix::from_vec(5, 9, (0..45).map(|x| Complex64::new(0.5, -(x as f64))).collect())
            .unwrap();
        let expected = naive::multiply(&a, &b, &mut NoCounter).unwrap();
        for kernel in BlockKernel::ALL {
            let got = multiply(&a, &b, kernel, &mut NoCounter).unwrap();
            assert!(got.max_abs_diff(&expected).unwrap() < 1e-9, "{kernel}");
        }
    }

    #[test]
    fn test_empty_dimensions() {
        let a = Matrix::<f64>::zeros(3, 0);
        let b = Matrix::<f64>::zeros(0, 2);
        let c = multiply(&a, &b, BlockKernel::AlphaEvolve, &mut NoCounter).unwrap();
        assert_eq!(c, Matrix::zeros(3, 2));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::<f64>::zeros(4, 4);
        let b = Matrix::<f64>::zeros(5, 4);
        assert!(multiply(&a, &b, BlockKernel::Winograd, &mut NoCounter).is_err());
    }
}
