use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fm_core::Algorithm;

use crate::config::ElementKind;
use crate::error::Result;
use crate::generators::MatrixKind;

pub const CSV_HEADER: &str =
    "algorithm,matrix_type,element_type,size,time_ms,memory_bytes,mul_count,add_count,correctness_error";

/// Outcome of timing one algorithm on one operand pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub algorithm: Algorithm,
    pub matrix_kind: MatrixKind,
    pub element_type: ElementKind,
    /// Side length of the square operands.
    pub size: usize,
    pub time_ms: f64,
    /// Resident memory growth across the call, 0 if it shrank or is unknown.
    pub memory_bytes: u64,
    pub mul_count: u64,
    pub add_count: u64,
    /// Largest element-wise distance from the naive product.
    pub max_error: f64,
}

impl BenchmarkRecord {
    /// One CSV row matching [`CSV_HEADER`], without the line terminator.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{},{},{},{}",
            self.algorithm,
            self.matrix_kind,
            self.element_type,
            self.size,
            self.time_ms,
            self.memory_bytes,
            self.mul_count,
            self.add_count,
            scientific(self.max_error, 10),
        )
    }
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Matrix Type: {}", self.matrix_kind)?;
        writeln!(f, "Element Type: {}", self.element_type)?;
        writeln!(f, "Size: {}x{}", self.size, self.size)?;
        writeln!(f, "Time: {:.3} ms", self.time_ms)?;
        writeln!(f, "Memory: {} bytes", self.memory_bytes)?;
        writeln!(f, "Operations: {} mul, {} add", self.mul_count, self.add_count)?;
        writeln!(f, "Error vs Naive: {}", scientific(self.max_error, 6))?;
        writeln!(f, "---")
    }
}

/// `d.ddddde±XX`: fixed mantissa digits and an exponent of at least two
/// digits with an explicit sign.
fn scientific(x: f64, digits: usize) -> String {
    let s = format!("{x:.digits$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.abs())
            }
            Err(_) => s,
        },
        // inf / NaN
        None => s,
    }
}

/// Ordered collection of records with CSV export.
#[derive(Debug, Default)]
pub struct BenchmarkSuite {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Header line followed by one line per record.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{CSV_HEADER}")?;
        for r in &self.records {
            writeln!(writer, "{}", r.to_csv())?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }
}

impl fmt::Display for BenchmarkSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f)?;
        for r in &self.records {
            write!(f, "{r}")?;
        }
        Ok(())
    }
}
