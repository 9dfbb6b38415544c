use std::process;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::ValueEnum;
use ndarray::arr1;
use ndarray::Array1;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tsgen::stats::PathSummary;
use tsgen::stochastic::autoregressive::ar::ARp;
use tsgen::stochastic::autoregressive::arima::ARIMA;
use tsgen::stochastic::autoregressive::arma::ARMA;
use tsgen::stochastic::autoregressive::garch::Garch11;
use tsgen::stochastic::autoregressive::ma::MAq;
use tsgen::stochastic::autoregressive::sarima::SARIMA;
use tsgen::traits::ProcessExt;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Model {
  /// AR(2), phi = [0.75, -0.25]
  Ar,
  /// MA(2), theta = [0.6, 0.3]
  Ma,
  /// ARMA(1,1), phi = 0.5, theta = 0.4
  Arma,
  /// ARIMA(1,1,1), phi = 0.5, theta = 0.4
  Arima,
  /// SARIMA(1,1,0)(1,1,0)_12
  Sarima,
  /// GARCH(1,1), alpha0 = 0.2, alpha1 = 0.5, beta1 = 0.3
  Garch,
}

/// Simulate sample paths and print their summaries.
#[derive(Debug, Parser)]
#[command(name = "tsgen", version, about = "Synthetic time-series path generator")]
struct DemoConfig {
  #[arg(value_enum, default_value_t = Model::Ar)]
  model: Model,

  /// Samples per path.
  #[arg(short, long, default_value_t = 1000)]
  n: usize,

  /// Seed of the first path; path i uses seed + i.
  #[arg(short, long, default_value_t = 42)]
  seed: u64,

  /// Number of independent paths.
  #[arg(short, long, default_value_t = 4)]
  paths: usize,

  /// Increase verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn init_logging(verbosity: u8) {
  let level = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("tsgen={level}")));
  tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
  let cfg = DemoConfig::parse();
  init_logging(cfg.verbose);

  if let Err(e) = run(&cfg) {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn run(cfg: &DemoConfig) -> Result<()> {
  info!(model = ?cfg.model, n = cfg.n, seed = cfg.seed, paths = cfg.paths, "simulating");

  let paths: Vec<Array1<f64>> = match cfg.model {
    Model::Ar => ARp::new(2, arr1(&[0.75, -0.25]), cfg.n)?.sample_par(cfg.paths, cfg.seed)?,
    Model::Ma => MAq::new(2, arr1(&[0.6, 0.3]), cfg.n)?.sample_par(cfg.paths, cfg.seed)?,
    Model::Arma => {
      ARMA::new(1, 1, arr1(&[0.5]), arr1(&[0.4]), cfg.n)?.sample_par(cfg.paths, cfg.seed)?
    }
    Model::Arima => {
      ARIMA::new((1, 1, 1), arr1(&[0.5]), arr1(&[0.4]), cfg.n)?.sample_par(cfg.paths, cfg.seed)?
    }
    Model::Sarima => SARIMA::new(
      (1, 1, 0),
      (1, 1, 0, 12),
      arr1(&[-0.4]),
      Array1::zeros(0),
      arr1(&[0.2]),
      Array1::zeros(0),
      cfg.n,
    )?
    .sample_par(cfg.paths, cfg.seed)?,
    Model::Garch => {
      let model = Garch11::new(0.2, 0.5, 0.3, 0.2, cfg.n)?;
      if let Some(var) = model.unconditional_variance() {
        println!("unconditional variance: {var:.4}");
      }
      let garch_paths = model.sample_par(cfg.paths, cfg.seed)?;
      for (i, path) in garch_paths.iter().enumerate() {
        let sigma = PathSummary::from_path(&path.sigma)
          .with_context(|| format!("summarising volatility of path {i}"))?;
        println!("path {i} sigma: {sigma}");
      }
      garch_paths.into_iter().map(|p| p.x).collect()
    }
  };

  for (i, path) in paths.iter().enumerate() {
    let summary =
      PathSummary::from_path(path).with_context(|| format!("summarising path {i}"))?;
    println!("path {i}: {summary}");
  }

  Ok(())
}
