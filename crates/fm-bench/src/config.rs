use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use fm_core::Algorithm;

use crate::error::{BenchError, Result};
use crate::generators::{MatrixKind, ValueRange};

/// Element type a benchmark pass runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `f64`
    Double,
    /// `Complex64`
    Complex,
    /// `f32`
    Float,
    /// `i64`
    Int,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Double,
        ElementKind::Complex,
        ElementKind::Float,
        ElementKind::Int,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Double => "double",
            ElementKind::Complex => "complex",
            ElementKind::Float => "float",
            ElementKind::Int => "int",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        ElementKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| BenchError::InvalidConfig(format!("unknown element type: {s}")))
    }
}

/// Benchmark run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Square matrix sizes to benchmark.
    pub sizes: Vec<usize>,
    /// Matrix structures to generate.
    pub kinds: Vec<MatrixKind>,
    /// Element types, one full pass each.
    pub elements: Vec<ElementKind>,
    /// Algorithms to time; all of them by default.
    pub algorithms: Vec<Algorithm>,
    /// Seed for A; B uses `seed + 1`.
    pub seed: u64,
    /// Range generated values are drawn from.
    pub range: ValueRange,
    /// Probability of a zero element in sparse matrices.
    pub p_zero: f64,
    /// CSV destination.
    pub output: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![4, 8, 16, 64, 256],
            kinds: vec![MatrixKind::Random, MatrixKind::Symmetric],
            elements: vec![ElementKind::Double, ElementKind::Complex],
            algorithms: Algorithm::ALL.to_vec(),
            seed: 42,
            range: ValueRange::default(),
            p_zero: 0.9,
            output: PathBuf::from("benchmark_results.csv"),
        }
    }
}

impl BenchConfig {
    /// Build a configuration from command-line arguments (program name
    /// excluded). Options not given keep their defaults.
    ///
    /// Recognised flags: `--sizes`, `--kinds`, `--elements`, `--algorithms`
    /// (comma separated lists), `--seed N`, `--range LO,HI`, `--p-zero P`,
    /// `--output PATH`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(flag) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| BenchError::InvalidConfig(format!("{flag} needs a value")))?;
            match flag.as_str() {
                "--sizes" => cfg.sizes = parse_list(&flag, &value)?,
                "--kinds" => cfg.kinds = parse_list(&flag, &value)?,
                "--elements" => cfg.elements = parse_list(&flag, &value)?,
                "--algorithms" => cfg.algorithms = parse_list(&flag, &value)?,
                "--seed" => cfg.seed = parse_value(&flag, &value)?,
                "--range" => {
                    let bounds: Vec<f64> = parse_list(&flag, &value)?;
                    let [lo, hi] = bounds.as_slice() else {
                        return Err(BenchError::InvalidConfig(format!(
                            "--range expects LO,HI, got {value:?}"
                        )));
                    };
                    cfg.range = ValueRange::new(*lo, *hi)?;
                }
                "--p-zero" => cfg.p_zero = parse_value(&flag, &value)?,
                "--output" => cfg.output = PathBuf::from(value),
                _ => return Err(BenchError::InvalidConfig(format!("unknown flag: {flag}"))),
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.contains(&0) {
            return Err(BenchError::InvalidConfig("sizes must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.p_zero) {
            return Err(BenchError::InvalidConfig(format!(
                "--p-zero must be in [0, 1], got {}",
                self.p_zero
            )));
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BenchError::InvalidConfig(format!("{flag}: cannot parse {value:?}")))
}

fn parse_list<T: FromStr>(flag: &str, value: &str) -> Result<Vec<T>> {
    let items: Vec<T> = value
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_value(flag, s))
        .collect::<Result<_>>()?;
    if items.is_empty() {
        return Err(BenchError::InvalidConfig(format!("{flag}: empty list")));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fm_core::BlockKernel;

    #[test]
    fn test_defaults() {
        let cfg = BenchConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(cfg, BenchConfig::default());
        assert_eq!(cfg.sizes, vec![4, 8, 16, 64, 256]);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.algorithms.len(), 9);
        assert_eq!(cfg.output, PathBuf::from("benchmark_results.csv"));
    }

    #[test]
    fn test_all_flags() {
        let cfg = BenchConfig::from_args([
            "--sizes", "4,12",
            "--kinds", "sparse",
            "--elements", "int,float",
            "--algorithms", "naive,blocked_winograd",
            "--seed", "7",
            "--range", "-5,5",
            "--p-zero", "0.5",
            "--output", "out.csv",
        ])
        .unwrap();
        assert_eq!(cfg.sizes, vec![4, 12]);
        assert_eq!(cfg.kinds, vec![MatrixKind::Sparse]);
        assert_eq!(cfg.elements, vec![ElementKind::Int, ElementKind::Float]);
        assert_eq!(
            cfg.algorithms,
            vec![Algorithm::Naive, Algorithm::Blocked(BlockKernel::Winograd)]
        );
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.range, ValueRange::new(-5.0, 5.0).unwrap());
        assert_eq!(cfg.p_zero, 0.5);
        assert_eq!(cfg.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_rejects_bad_input() {
        for args in [
            vec!["--verbose", "1"],
            vec!["--seed"],
            vec!["--seed", "-1"],
            vec!["--sizes", "4,0"],
            vec!["--sizes", ","],
            vec!["--kinds", "diagonal"],
            vec!["--algorithms", "blas"],
            vec!["--range", "1"],
            vec!["--range", "1,0"],
            vec!["--p-zero", "1.5"],
        ] {
            let err = BenchConfig::from_args(args.clone()).unwrap_err();
            assert!(matches!(err, BenchError::InvalidConfig(_)), "{args:?}: {err}");
        }
    }

    #[test]
    fn test_element_names() {
        for e in ElementKind::ALL {
            assert_eq!(e.to_string().parse::<ElementKind>().unwrap(), e);
        }
    }
}
