//! # Stats
//!
//! $$
//! \bar X = \tfrac{1}{n}\sum_t X_t, \quad s^2 = \tfrac{1}{n}\sum_t (X_t - \bar X)^2
//! $$
//!
use std::fmt;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::error::Result;
use crate::error::SimulationError;
use crate::traits::FloatExt;

/// Descriptive statistics of a single sample path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSummary<T: FloatExt> {
  pub len: usize,
  pub mean: T,
  /// Population variance (ddof = 0).
  pub variance: T,
  pub min: T,
  pub max: T,
  /// \(\max_t |X_t|\)
  pub max_abs: T,
}

impl<T: FloatExt> PathSummary<T> {
  /// # Errors
  /// Fails on an empty path or one containing NaN/infinity.
  pub fn from_path(path: &Array1<T>) -> Result<Self> {
    let n = path.len();
    if n == 0 {
      return Err(SimulationError::InvalidSampleCount { n });
    }
    if let Some(v) = path.iter().find(|v| !v.is_finite()) {
      return Err(SimulationError::NonFiniteParameter {
        name: "path",
        value: v.to_f64().unwrap_or(f64::NAN),
      });
    }

    let mean = path.sum() / T::from_usize_(n);
    let variance = path.var(T::zero());
    // finite, non-empty input cannot produce an undefined ordering
    let min = *path.min().map_err(|_| SimulationError::InvalidSampleCount { n })?;
    let max = *path.max().map_err(|_| SimulationError::InvalidSampleCount { n })?;

    Ok(Self {
      len: n,
      mean,
      variance,
      min,
      max,
      max_abs: min.abs().max(max.abs()),
    })
  }

  pub fn std_dev(&self) -> T {
    self.variance.sqrt()
  }
}

impl<T: FloatExt> fmt::Display for PathSummary<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "n={} mean={:.4} sd={:.4} min={:.4} max={:.4}",
      self.len,
      self.mean,
      self.std_dev(),
      self.min,
      self.max
    )
  }
}
