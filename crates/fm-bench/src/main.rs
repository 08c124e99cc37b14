use std::process::ExitCode;

use fm_bench::{run_all, BenchConfig};
use log::{error, info};

fn run() -> fm_bench::Result<()> {
    let cfg = BenchConfig::from_args(std::env::args().skip(1))?;
    info!(
        "sizes {:?}, {} algorithm(s), seed {}",
        cfg.sizes,
        cfg.algorithms.len(),
        cfg.seed
    );

    let suite = run_all(&cfg)?;
    suite.save_csv(&cfg.output)?;

    println!("Total benchmarks run: {}", suite.len());
    println!("Results saved to {}", cfg.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
