use ndarray::Array1;
use tracing::debug;

use super::common::check_finite_scalar;
use super::common::check_n;
use super::common::check_noise;
use super::common::ensure_finite;
use super::common::to_f64;
use crate::error::Result;
use crate::error::SimulationError;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Implements a GARCH(1,1) model:
///
/// \[
///   \sigma_t = \sqrt{\alpha_0 + \alpha_1 X_{t-1}^2 + \beta_1 \sigma_{t-1}^2},
///   \quad X_t = \sigma_t \, z_t, \quad t \ge 1,
/// \]
///
/// seeded with \(\sigma_0 = \omega\) and \(X_0 = 0\).
///
/// # Notes
/// Non-negative \(\alpha_0, \alpha_1, \beta_1\) keep the radicand non-negative, so
/// negative values are rejected up front. Covariance stationarity additionally
/// requires \(\alpha_1 + \beta_1 < 1\); it is reported by
/// [`Garch11::is_covariance_stationary`] but not enforced.
#[derive(Debug, Clone)]
pub struct Garch11<T: FloatExt> {
  /// Constant term in the variance equation
  pub alpha0: T,
  /// ARCH coefficient
  pub alpha1: T,
  /// GARCH coefficient
  pub beta1: T,
  /// Initial conditional standard deviation
  pub omega: T,
  /// Number of observations
  pub n: usize,
}

/// Parallel output sequences of a GARCH run.
#[derive(Debug, Clone, PartialEq)]
pub struct GarchPath<T: FloatExt> {
  /// Conditional standard deviation \(\sigma_t\)
  pub sigma: Array1<T>,
  /// Observations \(X_t\)
  pub x: Array1<T>,
}

impl<T: FloatExt> Garch11<T> {
  pub fn new(alpha0: T, alpha1: T, beta1: T, omega: T, n: usize) -> Result<Self> {
    for (name, value) in [
      ("alpha0", alpha0),
      ("alpha1", alpha1),
      ("beta1", beta1),
      ("omega", omega),
    ] {
      check_finite_scalar(name, value)?;
      if value < T::zero() {
        return Err(SimulationError::NegativeParameter {
          name,
          value: to_f64(value),
        });
      }
    }
    check_n(n)?;

    Ok(Self {
      alpha0,
      alpha1,
      beta1,
      omega,
      n,
    })
  }

  /// \(\alpha_1 + \beta_1 < 1\)
  pub fn is_covariance_stationary(&self) -> bool {
    self.alpha1 + self.beta1 < T::one()
  }

  /// \(\alpha_0 / (1 - \alpha_1 - \beta_1)\), or `None` when the process is not covariance stationary.
  pub fn unconditional_variance(&self) -> Option<T> {
    if !self.is_covariance_stationary() {
      return None;
    }
    Some(self.alpha0 / (T::one() - self.alpha1 - self.beta1))
  }
}

impl<T: FloatExt> ProcessExt<T> for Garch11<T> {
  type Output = GarchPath<T>;

  fn n(&self) -> usize {
    self.n
  }

  fn sample_with_noise(&self, z: &Array1<T>) -> Result<Self::Output> {
    check_noise(z, self.n)?;
    debug!(n = self.n, "sampling GARCH(1,1) path");

    let mut x = Array1::<T>::zeros(self.n);
    let mut sigma = Array1::<T>::zeros(self.n);
    sigma[0] = self.omega;

    for t in 1..self.n {
      let var_t = self.alpha0
        + self.alpha1 * x[t - 1].powi(2)
        + self.beta1 * sigma[t - 1].powi(2);
      sigma[t] = ensure_finite(t, var_t.sqrt())?;
      x[t] = ensure_finite(t, sigma[t] * z[t])?;
    }

    Ok(GarchPath { sigma, x })
  }
}

/// GARCH(1,1) recurrence over an explicit innovation sequence.
pub fn garch11<T: FloatExt>(
  alpha0: T,
  alpha1: T,
  beta1: T,
  omega: T,
  n: usize,
  z: &Array1<T>,
) -> Result<GarchPath<T>> {
  Garch11::new(alpha0, alpha1, beta1, omega, n)?.sample_with_noise(z)
}
