use ndarray::Array1;
use tracing::debug;

use super::common::check_finite;
use super::common::check_n;
use super::common::check_noise;
use super::common::check_order;
use super::common::companion_is_stable;
use super::common::ensure_finite;
use crate::error::Result;
use crate::error::SimulationError;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Implements an ARMA(p, q) model with a single shared innovation sequence:
///
/// \[
///   X_t = \sum_{i=1}^p \phi_i X_{t-i} + \epsilon_t + \sum_{j=1}^q \theta_j \epsilon_{t-j},
///   \quad t \ge \max(p, q),
/// \]
///
/// with zero seeds before \(\max(p, q)\), the same convention as [`super::ar::ARp`]
/// and [`super::ma::MAq`].
#[derive(Debug, Clone)]
pub struct ARMA<T: FloatExt> {
  /// AR coefficients (\(\phi_1,\dots,\phi_p\))
  pub phi: Array1<T>,
  /// MA coefficients (\(\theta_1,\dots,\theta_q\))
  pub theta: Array1<T>,
  /// Number of observations
  pub n: usize,
}

impl<T: FloatExt> ARMA<T> {
  pub fn new(p: usize, q: usize, phi: Array1<T>, theta: Array1<T>, n: usize) -> Result<Self> {
    check_order("phi", phi.len(), p)?;
    check_order("theta", theta.len(), q)?;
    check_finite("phi", &phi)?;
    check_finite("theta", &theta)?;
    check_n(n)?;
    Ok(Self { phi, theta, n })
  }

  pub fn p(&self) -> usize {
    self.phi.len()
  }

  pub fn q(&self) -> usize {
    self.theta.len()
  }

  /// First index produced by the recurrence.
  pub fn start(&self) -> usize {
    self.p().max(self.q())
  }

  pub fn is_stationary(&self) -> bool {
    companion_is_stable(&self.phi)
  }

  pub fn is_invertible(&self) -> bool {
    companion_is_stable(&self.theta.mapv(|v| -v))
  }

  pub fn require_stationary(self) -> Result<Self> {
    if !self.is_stationary() {
      return Err(SimulationError::NonStationary { model: "ARMA" });
    }
    Ok(self)
  }
}

impl<T: FloatExt> ProcessExt<T> for ARMA<T> {
  type Output = Array1<T>;

  fn n(&self) -> usize {
    self.n
  }

  fn sample_with_noise(&self, noise: &Array1<T>) -> Result<Self::Output> {
    check_noise(noise, self.n)?;
    let p = self.p();
    let q = self.q();
    debug!(p, q, n = self.n, "sampling ARMA(p,q) path");

    let mut series = Array1::<T>::zeros(self.n);
    for t in self.start()..self.n {
      let mut val = noise[t];
      for k in 1..=p {
        val += self.phi[k - 1] * series[t - k];
      }
      for k in 1..=q {
        val += self.theta[k - 1] * noise[t - k];
      }
      series[t] = ensure_finite(t, val)?;
    }

    Ok(series)
  }
}

/// ARMA(p, q) recurrence over an explicit innovation sequence.
pub fn arma<T: FloatExt>(
  p: usize,
  q: usize,
  phi: &[T],
  theta: &[T],
  n: usize,
  noise: &Array1<T>,
) -> Result<Array1<T>> {
  ARMA::new(
    p,
    q,
    Array1::from(phi.to_vec()),
    Array1::from(theta.to_vec()),
    n,
  )?
  .sample_with_noise(noise)
}
