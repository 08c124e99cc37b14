use std::io::{BufRead, Write};
use std::str::FromStr;

use fm_core::{Matrix, Scalar};

use crate::error::{BenchError, Result};

/// Read `rows * cols` whitespace-separated values, row-major.
///
/// Values may be spread over any number of lines; anything after the last
/// needed value is left unread on its line and ignored.
///
/// # Errors
/// `Parse` for a token that is not a `T`, `UnexpectedEof` if the input ends
/// early.
pub fn read_matrix<T, R>(reader: R, rows: usize, cols: usize) -> Result<Matrix<T>>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    let expected = rows * cols;
    let mut data = Vec::with_capacity(expected);

    for (idx, line) in reader.lines().enumerate() {
        if data.len() == expected {
            break;
        }
        let line = line?;
        for token in line.split_whitespace() {
            if data.len() == expected {
                break;
            }
            let value = token.parse::<T>().map_err(|_| BenchError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            data.push(value);
        }
    }

    if data.len() < expected {
        return Err(BenchError::UnexpectedEof {
            expected,
            got: data.len(),
        });
    }
    Ok(Matrix::from_vec(rows, cols, data)?)
}

/// Write one row per line, each value followed by a single space.
pub fn write_matrix<T, W>(mut writer: W, m: &Matrix<T>) -> Result<()>
where
    T: std::fmt::Display,
    W: Write,
{
    write!(writer, "{m}")?;
    Ok(())
}
