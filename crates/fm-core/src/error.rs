use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error(
        "sub-view [{row}.., {col}..] of size {rows}x{cols} exceeds parent {parent_rows}x{parent_cols}"
    )]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        parent_rows: usize,
        parent_cols: usize,
    },
    #[error("buffer length {got} does not match {expected} elements")]
    BufferSize { expected: usize, got: usize },
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, MatmulError>;

/// Fails with `ShapeMismatch` unless `got == expected`.
pub(crate) fn ensure_shape(expected: (usize, usize), got: (usize, usize)) -> Result<()> {
    if expected != got {
        return Err(MatmulError::ShapeMismatch { expected, got });
    }
    Ok(())
}

/// Fails with `DimensionMismatch` unless `a` (m×k) and `b` (k2×n) conform.
pub(crate) fn ensure_conformable(a: (usize, usize), b: (usize, usize)) -> Result<()> {
    if a.1 != b.0 {
        return Err(MatmulError::DimensionMismatch {
            m: a.0,
            k: a.1,
            k2: b.0,
            n: b.1,
        });
    }
    Ok(())
}
