use ndarray::Array1;
use tracing::debug;

use super::common::check_finite;
use super::common::check_n;
use super::common::check_noise;
use super::common::check_order;
use super::common::ensure_finite;
use super::common::inverse_difference;
use super::common::inverse_seasonal_difference;
use crate::error::Result;
use crate::error::SimulationError;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Implements a SARIMA model, often denoted:
///
/// SARIMA(p, d, q) (P, D, Q)_s
///
/// using the "backshift" definition:
/// \[
///   \Phi(B^s)\,\phi(B)\,(1 - B)^d (1 - B^s)^D\,X_t
///     = \Theta(B^s)\,\theta(B)\,\epsilon_t,
/// \]
/// where:
/// - \(\phi(B)\) and \(\theta(B)\) capture the non-seasonal AR/MA parts (orders p,q),
/// - \(\Phi(B^s)\) and \(\Theta(B^s)\) capture the seasonal AR/MA parts (orders P,Q) with season length \(s\),
/// - \(d\) is the non-seasonal differencing order,
/// - \(D\) is the seasonal differencing order.
///
/// # Implementation Notes
/// 1. The seasonal ARMA part is the additive recurrence
///    \(Y_t = \sum_i \phi_i Y_{t-i} + \sum_k \Phi_k Y_{t-ks} + \epsilon_t
///    + \sum_j \theta_j \epsilon_{t-j} + \sum_k \Theta_k \epsilon_{t-ks}\),
///    zero-seeded up to \(\max(p, q, Ps, Qs)\).
/// 2. \(Y\) is read as \(\Delta^d \Delta_s^D X_t\): seasonal differencing is inverted
///    `D` times (lag s), then non-seasonal differencing `d` times.
#[derive(Debug, Clone)]
pub struct SARIMA<T: FloatExt> {
  /// Non-seasonal AR coefficients, length p
  pub phi: Array1<T>,
  /// Non-seasonal MA coefficients, length q
  pub theta: Array1<T>,
  /// Seasonal AR coefficients, length P
  pub seasonal_phi: Array1<T>,
  /// Seasonal MA coefficients, length Q
  pub seasonal_theta: Array1<T>,
  /// Non-seasonal differencing (d)
  pub d: usize,
  /// Seasonal differencing (D)
  pub seasonal_d: usize,
  /// Season length
  pub s: usize,
  /// Final length of the time series
  pub n: usize,
}

impl<T: FloatExt> SARIMA<T> {
  /// `order` is `(p, d, q)` and `seasonal_order` is `(P, D, Q, s)`.
  pub fn new(
    order: (usize, usize, usize),
    seasonal_order: (usize, usize, usize, usize),
    phi: Array1<T>,
    theta: Array1<T>,
    seasonal_phi: Array1<T>,
    seasonal_theta: Array1<T>,
    n: usize,
  ) -> Result<Self> {
    let (p, d, q) = order;
    let (big_p, seasonal_d, big_q, s) = seasonal_order;
    if s == 0 {
      return Err(SimulationError::InvalidSeasonLength);
    }
    check_order("phi", phi.len(), p)?;
    check_order("theta", theta.len(), q)?;
    check_order("seasonal_phi", seasonal_phi.len(), big_p)?;
    check_order("seasonal_theta", seasonal_theta.len(), big_q)?;
    check_finite("phi", &phi)?;
    check_finite("theta", &theta)?;
    check_finite("seasonal_phi", &seasonal_phi)?;
    check_finite("seasonal_theta", &seasonal_theta)?;
    check_n(n)?;

    Ok(Self {
      phi,
      theta,
      seasonal_phi,
      seasonal_theta,
      d,
      seasonal_d,
      s,
      n,
    })
  }

  /// First index produced by the seasonal ARMA recurrence.
  pub fn start(&self) -> usize {
    self
      .phi
      .len()
      .max(self.theta.len())
      .max(self.seasonal_phi.len().saturating_mul(self.s))
      .max(self.seasonal_theta.len().saturating_mul(self.s))
  }
}

impl<T: FloatExt> ProcessExt<T> for SARIMA<T> {
  type Output = Array1<T>;

  fn n(&self) -> usize {
    self.n
  }

  fn sample_with_noise(&self, noise: &Array1<T>) -> Result<Self::Output> {
    check_noise(noise, self.n)?;
    debug!(
      p = self.phi.len(),
      d = self.d,
      q = self.theta.len(),
      seasonal_p = self.seasonal_phi.len(),
      seasonal_d = self.seasonal_d,
      seasonal_q = self.seasonal_theta.len(),
      s = self.s,
      n = self.n,
      "sampling SARIMA path"
    );

    let mut sarma = Array1::<T>::zeros(self.n);
    for t in self.start()..self.n {
      let mut val = noise[t];

      for (lag_idx, &phi) in self.phi.iter().enumerate() {
        val += phi * sarma[t - lag_idx - 1];
      }
      for (lag_idx, &phi_s) in self.seasonal_phi.iter().enumerate() {
        val += phi_s * sarma[t - (lag_idx + 1) * self.s];
      }
      for (lag_idx, &theta) in self.theta.iter().enumerate() {
        val += theta * noise[t - lag_idx - 1];
      }
      for (lag_idx, &theta_s) in self.seasonal_theta.iter().enumerate() {
        val += theta_s * noise[t - (lag_idx + 1) * self.s];
      }

      sarma[t] = ensure_finite(t, val)?;
    }

    let mut integrated = sarma;
    for _ in 0..self.seasonal_d {
      integrated = inverse_seasonal_difference(&integrated, self.s)?;
    }
    for _ in 0..self.d {
      integrated = inverse_difference(&integrated)?;
    }

    Ok(integrated)
  }
}
