//! `fm-bench` - Operand generation, matrix I/O and the benchmark harness for `fm-core`.
//!
//! This crate provides:
//! - Seeded random, symmetric and sparse matrix generators over every element type
//! - Whitespace-separated matrix reading and writing
//! - A resident-memory probe and CSV benchmark records
//! - A runner that times each `Algorithm` against the naive product
//! - The `fm-bench` binary driven by `BenchConfig`

pub mod config;
pub mod error;
pub mod generators;
pub mod io;
pub mod report;
pub mod rss;
pub mod runner;

pub use config::{BenchConfig, ElementKind};
pub use error::{BenchError, Result};
pub use generators::{generate_pair, MatrixKind, SampleScalar, ValueRange};
pub use io::{read_matrix, write_matrix};
pub use report::{BenchmarkRecord, BenchmarkSuite, CSV_HEADER};
pub use rss::current_rss_bytes;
pub use runner::{run_all, run_for_type, run_single, should_run, BenchScalar};
