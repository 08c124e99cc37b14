//! Benchmark driver: generates operands, times every algorithm against a
//! naive reference and collects the records.

use std::time::Instant;

use fm_core::kernels::naive;
use fm_core::{Algorithm, ComplexLift, Matrix, NoCounter, OpCounter};
use log::{debug, info, warn};
use num_complex::Complex64;

use crate::config::{BenchConfig, ElementKind};
use crate::error::Result;
use crate::generators::{generate_pair, MatrixKind, SampleScalar};
use crate::report::{BenchmarkRecord, BenchmarkSuite};
use crate::rss::current_rss_bytes;

/// Element types the harness can generate and check.
pub trait BenchScalar: ComplexLift + SampleScalar {}

impl<T: ComplexLift + SampleScalar> BenchScalar for T {}

/// Whether `alg` is timed at `size`: the fixed kernels only at 4, recursive
/// Strassen only at powers of two.
pub fn should_run(alg: Algorithm, size: usize) -> bool {
    match alg {
        Algorithm::Strassen => size.is_power_of_two(),
        a if a.is_fixed_size() => a.supports(size, size, size),
        _ => true,
    }
}

/// Time one algorithm on one operand pair.
///
/// The error column is the max-abs difference from `reference` (0 when no
/// reference is given). Memory is the RSS growth across the call, clamped at
/// zero.
pub fn run_single<T: ComplexLift>(
    alg: Algorithm,
    matrix_kind: MatrixKind,
    element_type: ElementKind,
    a: &Matrix<T>,
    b: &Matrix<T>,
    reference: Option<&Matrix<T>>,
) -> Result<BenchmarkRecord> {
    let mut cnt = OpCounter::new();

    let rss_before = current_rss_bytes();
    let start = Instant::now();
    let c = alg.multiply(a, b, &mut cnt)?;
    let elapsed = start.elapsed();
    let rss_after = current_rss_bytes();

    let memory_bytes = match (rss_before, rss_after) {
        (Some(before), Some(after)) => after.saturating_sub(before),
        _ => 0,
    };
    let max_error = match reference {
        Some(r) => c.max_abs_diff(r)?,
        None => 0.0,
    };

    Ok(BenchmarkRecord {
        algorithm: alg,
        matrix_kind,
        element_type,
        size: a.rows(),
        time_ms: elapsed.as_secs_f64() * 1e3,
        memory_bytes,
        mul_count: cnt.mul,
        add_count: cnt.add,
        max_error,
    })
}

/// Run every configured kind × size × algorithm for one element type.
///
/// A failing algorithm is logged and skipped; generator errors abort.
pub fn run_for_type<T: BenchScalar>(
    suite: &mut BenchmarkSuite,
    element_type: ElementKind,
    cfg: &BenchConfig,
) -> Result<()> {
    info!("running benchmarks for {element_type}");

    for &kind in &cfg.kinds {
        info!("matrix type: {kind}");

        for &size in &cfg.sizes {
            info!("size {size}x{size}");

            let (a, b) = generate_pair::<T>(kind, size, cfg.seed, cfg.range, cfg.p_zero)?;
            let reference = naive::multiply(&a, &b, &mut NoCounter)?;

            for &alg in &cfg.algorithms {
                if !should_run(alg, size) {
                    continue;
                }
                match run_single(alg, kind, element_type, &a, &b, Some(&reference)) {
                    Ok(record) => {
                        debug!(
                            "{alg}: {:.2} ms, error {:e}",
                            record.time_ms, record.max_error
                        );
                        suite.add(record);
                    }
                    Err(e) => warn!("{alg}: failed ({e})"),
                }
            }
        }
    }
    Ok(())
}

/// Run the configured element types in order.
pub fn run_all(cfg: &BenchConfig) -> Result<BenchmarkSuite> {
    if current_rss_bytes().is_none() {
        warn!("resident memory probe unavailable, memory column will be 0");
    }

    let mut suite = BenchmarkSuite::new();
    for &element in &cfg.elements {
        match element {
            ElementKind::Double => run_for_type::<f64>(&mut suite, element, cfg)?,
            ElementKind::Complex => run_for_type::<Complex64>(&mut suite, element, cfg)?,
            ElementKind::Float => run_for_type::<f32>(&mut suite, element, cfg)?,
            ElementKind::Int => run_for_type::<i64>(&mut suite, element, cfg)?,
        }
    }
    Ok(suite)
}
