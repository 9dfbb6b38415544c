use ndarray::Array1;
use tracing::debug;

use super::common::check_finite;
use super::common::check_n;
use super::common::check_noise;
use super::common::check_order;
use super::common::companion_is_stable;
use super::common::ensure_finite;
use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Implements an MA(q) model:
///
/// \[
///   X_t = \epsilon_t + \theta_1 \epsilon_{t-1} + \dots + \theta_q \epsilon_{t-q},
///   \quad t \ge q,
/// \]
///
/// with \(X_t = 0\) for \(t < q\). A pure FIR filter over the innovations.
#[derive(Debug, Clone)]
pub struct MAq<T: FloatExt> {
  /// MA coefficients
  pub theta: Array1<T>,
  /// Number of observations
  pub n: usize,
}

impl<T: FloatExt> MAq<T> {
  pub fn new(q: usize, theta: Array1<T>, n: usize) -> Result<Self> {
    check_order("theta", theta.len(), q)?;
    check_finite("theta", &theta)?;
    check_n(n)?;
    Ok(Self { theta, n })
  }

  pub fn q(&self) -> usize {
    self.theta.len()
  }

  /// True when every root of \(1 + \theta_1 z + \dots + \theta_q z^q\) lies outside the unit circle.
  pub fn is_invertible(&self) -> bool {
    companion_is_stable(&self.theta.mapv(|v| -v))
  }
}

impl<T: FloatExt> ProcessExt<T> for MAq<T> {
  type Output = Array1<T>;

  fn n(&self) -> usize {
    self.n
  }

  fn sample_with_noise(&self, noise: &Array1<T>) -> Result<Self::Output> {
    check_noise(noise, self.n)?;
    let q = self.q();
    debug!(q, n = self.n, "sampling MA(q) path");

    let mut series = Array1::<T>::zeros(self.n);
    for t in q..self.n {
      let mut val = noise[t];
      for k in 1..=q {
        val += self.theta[k - 1] * noise[t - k];
      }
      series[t] = ensure_finite(t, val)?;
    }

    Ok(series)
  }
}

/// MA(q) recurrence over an explicit innovation sequence.
pub fn ma<T: FloatExt>(q: usize, theta: &[T], n: usize, noise: &Array1<T>) -> Result<Array1<T>> {
  MAq::new(q, Array1::from(theta.to_vec()), n)?.sample_with_noise(noise)
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::arr1;

  use super::ma;
  use super::MAq;
  use crate::error::SimulationError;
  use crate::stochastic::noise::wn::Wn;
  use crate::traits::ProcessExt;

  #[test]
  fn ma_rejects_order_mismatch() {
    let err = MAq::<f64>::new(1, arr1(&[0.6, 0.3]), 10).unwrap_err();
    assert!(matches!(
      err,
      SimulationError::DimensionMismatch {
        name: "theta",
        expected: 1,
        actual: 2
      }
    ));
  }

  #[test]
  fn ma_matches_independent_convolution() {
    let theta = [0.4, -0.3, 0.2];
    let n = 300;
    let eps = Wn::<f64>::new(n, None, None).sample_seeded(9).unwrap();
    let x = ma(3, &theta, n, &eps).unwrap();

    for t in 0..n {
      let expected = if t < 3 {
        0.0
      } else {
        theta
          .iter()
          .enumerate()
          .fold(eps[t], |acc, (j, th)| acc + th * eps[t - j - 1])
      };
      assert_abs_diff_eq!(x[t], expected, epsilon = 1e-12);
    }
  }

  #[test]
  fn ma_does_not_feed_back() {
    // a single impulse dies out after q steps
    let mut eps = ndarray::Array1::<f64>::zeros(10);
    eps[4] = 1.0;
    let x = ma(2, &[0.6, 0.3], 10, &eps).unwrap();
    assert_eq!(x, arr1(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.6, 0.3, 0.0, 0.0, 0.0]));
  }

  #[test]
  fn ma_rejects_short_innovations() {
    let model = MAq::<f64>::new(1, arr1(&[0.5]), 10).unwrap();
    let err = model.sample_with_noise(&arr1(&[1.0; 9])).unwrap_err();
    assert!(matches!(err, SimulationError::DimensionMismatch { .. }));
  }

  #[test]
  fn ma_overflow_fails_with_numerical_instability() {
    let model = MAq::<f64>::new(2, arr1(&[f64::MAX, f64::MAX]), 8).unwrap();
    let err = model
      .sample_with_noise(&ndarray::Array1::ones(8))
      .unwrap_err();
    assert!(matches!(
      err,
      SimulationError::NumericalInstability { step: 2, .. }
    ));
  }

  #[test]
  fn ma_invertibility() {
    assert!(MAq::<f64>::new(2, arr1(&[0.6, 0.3]), 8).unwrap().is_invertible());
    assert!(!MAq::<f64>::new(1, arr1(&[1.5]), 8).unwrap().is_invertible());
  }

  #[test]
  fn ma_par_paths_are_independent_and_reproducible() {
    let model = MAq::<f64>::new(2, arr1(&[0.6, 0.3]), 64).unwrap();
    let a = model.sample_par(8, 100).unwrap();
    let b = model.sample_par(8, 100).unwrap();
    assert_eq!(a, b);
    assert_ne!(a[0], a[1]);
    assert_eq!(a[3], model.sample_seeded(103).unwrap());
  }
}
