use fm_core::MatmulError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("matmul error: {0}")]
    Matmul(#[from] MatmulError),
    #[error("cannot parse {token:?} on line {line}")]
    Parse { line: usize, token: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unexpected end of input: expected {expected} values, got {got}")]
    UnexpectedEof { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, BenchError>;
