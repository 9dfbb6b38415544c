use ndarray::Array1;
use tracing::debug;

use super::arma::ARMA;
use super::common::inverse_difference;
use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Implements an ARIMA(p, d, q) process using explicit backshift notation:
///
/// \[
///   \phi(B)\,(1 - B)^d X_t = \theta(B)\,\epsilon_t,
/// \]
/// where \(\phi(B)\) and \(\theta(B)\) are polynomials of orders p and q, respectively,
/// and \(B\) is the backshift (lag) operator (\(B X_t = X_{t-1}\)).
///
/// The ARMA(p, q) part is generated first and then integrated `d` times.
#[derive(Debug, Clone)]
pub struct ARIMA<T: FloatExt> {
  /// Stationary ARMA(p, q) part
  pub arma: ARMA<T>,
  /// Differencing order (d)
  pub d: usize,
}

impl<T: FloatExt> ARIMA<T> {
  /// `order` is `(p, d, q)`.
  pub fn new(
    order: (usize, usize, usize),
    phi: Array1<T>,
    theta: Array1<T>,
    n: usize,
  ) -> Result<Self> {
    let (p, d, q) = order;
    Ok(Self {
      arma: ARMA::new(p, q, phi, theta, n)?,
      d,
    })
  }

  pub fn order(&self) -> (usize, usize, usize) {
    (self.arma.p(), self.d, self.arma.q())
  }
}

impl<T: FloatExt> ProcessExt<T> for ARIMA<T> {
  type Output = Array1<T>;

  fn n(&self) -> usize {
    self.arma.n
  }

  fn sample_with_noise(&self, noise: &Array1<T>) -> Result<Self::Output> {
    let mut result = self.arma.sample_with_noise(noise)?;
    debug!(d = self.d, "integrating ARMA path");
    for _ in 0..self.d {
      result = inverse_difference(&result)?;
    }
    Ok(result)
  }
}
