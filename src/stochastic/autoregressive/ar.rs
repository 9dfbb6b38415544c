use ndarray::Array1;
use tracing::debug;

use super::common::check_finite;
use super::common::check_finite_scalar;
use super::common::check_n;
use super::common::check_noise;
use super::common::check_order;
use super::common::companion_is_stable;
use super::common::ensure_finite;
use crate::error::Result;
use crate::error::SimulationError;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Implements an AR(p) model:
///
/// \[
///   X_t = c + \phi_1 X_{t-1} + \phi_2 X_{t-2} + \dots + \phi_p X_{t-p}
///         + \epsilon_t, \quad t \ge p,
/// \]
///
/// with \(X_t = 0\) for \(t < p\) unless initial values are supplied.
///
/// # Fields
/// - `phi`: Vector of AR coefficients (\(\phi_1, \ldots, \phi_p\)).
/// - `c`: Constant added at every recurrent step (zero by default).
/// - `n`: Length of the time series.
/// - `x0`: Optional seed values for \(t < p\).
#[derive(Debug, Clone)]
pub struct ARp<T: FloatExt> {
  /// AR coefficients
  pub phi: Array1<T>,
  /// Intercept
  pub c: T,
  /// Number of observations
  pub n: usize,
  /// Optional initial conditions
  pub x0: Option<Array1<T>>,
}

impl<T: FloatExt> ARp<T> {
  /// Create a new AR(p) process. `phi` must have exactly `p` entries.
  pub fn new(p: usize, phi: Array1<T>, n: usize) -> Result<Self> {
    check_order("phi", phi.len(), p)?;
    check_finite("phi", &phi)?;
    check_n(n)?;
    Ok(Self {
      phi,
      c: T::zero(),
      n,
      x0: None,
    })
  }

  pub fn with_constant(mut self, c: T) -> Result<Self> {
    check_finite_scalar("c", c)?;
    self.c = c;
    Ok(self)
  }

  /// Replaces the zero seeds. Only the first `p` values are used.
  pub fn with_initial_values(mut self, x0: Array1<T>) -> Result<Self> {
    if x0.len() < self.p() {
      return Err(SimulationError::DimensionMismatch {
        name: "x0",
        expected: self.p(),
        actual: x0.len(),
      });
    }
    check_finite("x0", &x0)?;
    self.x0 = Some(x0);
    Ok(self)
  }

  pub fn p(&self) -> usize {
    self.phi.len()
  }

  /// True when every root of \(1 - \phi_1 z - \dots - \phi_p z^p\) lies outside the unit circle.
  pub fn is_stationary(&self) -> bool {
    companion_is_stable(&self.phi)
  }

  pub fn require_stationary(self) -> Result<Self> {
    if !self.is_stationary() {
      return Err(SimulationError::NonStationary { model: "AR" });
    }
    Ok(self)
  }
}

impl<T: FloatExt> ProcessExt<T> for ARp<T> {
  type Output = Array1<T>;

  fn n(&self) -> usize {
    self.n
  }

  fn sample_with_noise(&self, noise: &Array1<T>) -> Result<Self::Output> {
    check_noise(noise, self.n)?;
    let p = self.p();
    debug!(p, n = self.n, "sampling AR(p) path");

    let mut series = Array1::<T>::zeros(self.n);

    if let Some(init) = &self.x0 {
      for t in 0..p.min(self.n) {
        series[t] = init[t];
      }
    }

    for t in p..self.n {
      let mut val = self.c + noise[t];
      for k in 1..=p {
        val += self.phi[k - 1] * series[t - k];
      }
      series[t] = ensure_finite(t, val)?;
    }

    Ok(series)
  }
}

/// AR(p) recurrence over an explicit innovation sequence.
pub fn ar<T: FloatExt>(p: usize, phi: &[T], n: usize, noise: &Array1<T>) -> Result<Array1<T>> {
  ARp::new(p, Array1::from(phi.to_vec()), n)?.sample_with_noise(noise)
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use ndarray::arr1;
  use ndarray::Array1;

  use super::ar;
  use super::ARp;
  use crate::error::SimulationError;
  use crate::stochastic::noise::wn::Wn;
  use crate::traits::ProcessExt;

  #[test]
  fn ar_rejects_order_mismatch() {
    let err = ARp::<f64>::new(3, arr1(&[0.4, -0.1]), 16).unwrap_err();
    assert_eq!(
      err,
      SimulationError::DimensionMismatch {
        name: "phi",
        expected: 3,
        actual: 2
      }
    );
  }

  #[test]
  fn ar_rejects_zero_samples() {
    let err = ARp::<f64>::new(1, arr1(&[0.4]), 0).unwrap_err();
    assert_eq!(err, SimulationError::InvalidSampleCount { n: 0 });
  }

  #[test]
  fn ar_rejects_short_initial_state() {
    let err = ARp::<f64>::new(2, arr1(&[0.4, -0.1]), 16)
      .unwrap()
      .with_initial_values(arr1(&[0.0]))
      .unwrap_err();
    assert!(matches!(
      err,
      SimulationError::DimensionMismatch { name: "x0", .. }
    ));
  }

  #[test]
  fn ar_rejects_nan_coefficient() {
    let err = ARp::<f64>::new(1, arr1(&[f64::NAN]), 16).unwrap_err();
    assert!(matches!(
      err,
      SimulationError::NonFiniteParameter { name: "phi", .. }
    ));
  }

  #[test]
  fn ar_seeds_are_zero_and_length_is_n() {
    let noise = Wn::<f64>::new(50, None, None).sample_seeded(3).unwrap();
    let x = ar(3, &[0.2, 0.1, 0.05], 50, &noise).unwrap();
    assert_eq!(x.len(), 50);
    assert_eq!(x[0], 0.0);
    assert_eq!(x[1], 0.0);
    assert_eq!(x[2], 0.0);
    assert_eq!(x[3], noise[3]);
  }

  #[test]
  fn ar_short_sample_is_all_seed_values() {
    let noise = arr1(&[1.0, 2.0]);
    let x = ar(3, &[0.5, 0.2, 0.1], 2, &noise).unwrap();
    assert_eq!(x, arr1(&[0.0, 0.0]));
  }

  #[test]
  fn ar_matches_hand_computed_recursion() {
    let noise = arr1(&[9.0, 9.0, 1.0, -0.5, 2.0]);
    let x = ar(2, &[0.5, -0.2], 5, &noise).unwrap();
    // x2 = 1, x3 = 0.5 - 0.5 = 0, x4 = 0 - 0.2 + 2
    assert_relative_eq!(x[2], 1.0);
    assert_relative_eq!(x[3], 0.0);
    assert_relative_eq!(x[4], 1.8);
  }

  #[test]
  fn ar_constant_and_initial_values() {
    let model = ARp::<f64>::new(1, arr1(&[0.5]), 4)
      .unwrap()
      .with_constant(1.0)
      .unwrap()
      .with_initial_values(arr1(&[2.0]))
      .unwrap();
    let x = model.sample_with_noise(&Array1::zeros(4)).unwrap();
    assert_eq!(x, arr1(&[2.0, 2.0, 2.0, 2.0]));
  }

  #[test]
  fn ar_is_deterministic_given_innovations() {
    let model = ARp::<f64>::new(2, arr1(&[0.75, -0.25]), 200).unwrap();
    let noise = Wn::<f64>::new(200, None, None).sample_seeded(5).unwrap();
    assert_eq!(
      model.sample_with_noise(&noise).unwrap(),
      model.sample_with_noise(&noise).unwrap()
    );
  }

  #[test]
  fn stable_ar1_stays_bounded() {
    let model = ARp::<f64>::new(1, arr1(&[0.9]), 10_000).unwrap();
    assert!(model.is_stationary());
    let x = model.sample_seeded(42).unwrap();
    // stationary std dev is 1 / sqrt(1 - 0.81) ~ 2.3
    assert!(x.iter().all(|v| v.abs() < 25.0));
  }

  #[test]
  fn explosive_ar1_grows_without_bound() {
    let model = ARp::<f64>::new(1, arr1(&[1.05]), 600).unwrap();
    assert!(!model.is_stationary());
    let x = model.sample_seeded(42).unwrap();
    let early = x.slice(ndarray::s![..100]).iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let late = x.slice(ndarray::s![500..]).iter().fold(0.0f64, |m, v| m.max(v.abs()));
    assert!(late > 1e6 * early.max(1.0));
  }

  #[test]
  fn overflowing_ar_reports_instability() {
    let model = ARp::<f64>::new(1, arr1(&[1e10]), 64).unwrap();
    let err = model.sample_with_noise(&Array1::ones(64)).unwrap_err();
    assert!(matches!(err, SimulationError::NumericalInstability { .. }));
  }

  #[test]
  fn require_stationary_rejects_unit_root() {
    let err = ARp::<f64>::new(1, arr1(&[1.0]), 8)
      .unwrap()
      .require_stationary()
      .unwrap_err();
    assert_eq!(err, SimulationError::NonStationary { model: "AR" });
  }
}
