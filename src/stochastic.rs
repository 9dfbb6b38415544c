//! # Stochastic Process Simulation Modules
//!
//! `stochastic` provides reproducible generators for the classical discrete-time
//! model families.
//!
//! ## Modules
//!
//! | Module             | Description                                                              |
//! |--------------------|--------------------------------------------------------------------------|
//! | [`autoregressive`] | AR, MA, ARMA, ARIMA, SARIMA and GARCH(1,1) recurrences.                  |
//! | [`noise`]          | Gaussian white-noise innovation sources.                                 |
//!
//! ## Randomness
//!
//! Nothing in this module touches a global RNG. A path is either computed from an
//! explicit innovation sequence (`sample_with_noise`) or from innovations drawn out
//! of an RNG the caller owns (`sample_with_rng`, `sample_seeded`).
//!
//! ## Parallelism
//!
//! `sample_par(m, seed)` uses `rayon` to generate `m` independent paths, each with its
//! own seeded RNG and output buffer.
//!
//! ## Example Usage
//!
//! ```rust
//! use ndarray::arr1;
//! use tsgen::stochastic::autoregressive::ar::ARp;
//! use tsgen::traits::ProcessExt;
//!
//! let ar = ARp::new(2, arr1(&[0.75, -0.25]), 100)?;
//! let path = ar.sample_seeded(42)?;
//! ```

pub mod autoregressive;
pub mod noise;

use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Normal;

use crate::error::Result;
use crate::traits::FloatExt;

pub use crate::traits::ProcessExt;

impl FloatExt for f64 {
  fn from_f64_fast(v: f64) -> Self {
    v
  }

  fn from_usize_(n: usize) -> Self {
    n as f64
  }

  fn normal_array<R: Rng + ?Sized>(
    n: usize,
    mean: Self,
    std_dev: Self,
    rng: &mut R,
  ) -> Result<Array1<Self>> {
    Ok(Array1::random_using(n, Normal::new(mean, std_dev)?, rng))
  }
}

impl FloatExt for f32 {
  fn from_f64_fast(v: f64) -> Self {
    v as f32
  }

  fn from_usize_(n: usize) -> Self {
    n as f32
  }

  fn normal_array<R: Rng + ?Sized>(
    n: usize,
    mean: Self,
    std_dev: Self,
    rng: &mut R,
  ) -> Result<Array1<Self>> {
    Ok(Array1::random_using(n, Normal::new(mean, std_dev)?, rng))
  }
}
