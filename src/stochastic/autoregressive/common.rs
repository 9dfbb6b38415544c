use nalgebra::DMatrix;
use ndarray::Array1;
use tracing::warn;

use crate::error::Result;
use crate::error::SimulationError;
use crate::traits::FloatExt;

pub(crate) fn check_order(name: &'static str, actual: usize, expected: usize) -> Result<()> {
  if actual != expected {
    return Err(SimulationError::DimensionMismatch {
      name,
      expected,
      actual,
    });
  }
  Ok(())
}

pub(crate) fn check_n(n: usize) -> Result<()> {
  if n == 0 {
    return Err(SimulationError::InvalidSampleCount { n });
  }
  Ok(())
}

pub(crate) fn check_finite<T: FloatExt>(name: &'static str, values: &Array1<T>) -> Result<()> {
  match values.iter().find(|v| !v.is_finite()) {
    Some(v) => Err(SimulationError::NonFiniteParameter {
      name,
      value: to_f64(*v),
    }),
    None => Ok(()),
  }
}

pub(crate) fn check_finite_scalar<T: FloatExt>(name: &'static str, value: T) -> Result<()> {
  if !value.is_finite() {
    return Err(SimulationError::NonFiniteParameter {
      name,
      value: to_f64(value),
    });
  }
  Ok(())
}

/// Innovations must be finite and exactly `n` long.
pub(crate) fn check_noise<T: FloatExt>(noise: &Array1<T>, n: usize) -> Result<()> {
  check_order("innovations", noise.len(), n)?;
  check_finite("innovations", noise)
}

/// Passes `value` through, or aborts the run if the recurrence blew up at step `t`.
#[inline]
pub(crate) fn ensure_finite<T: FloatExt>(t: usize, value: T) -> Result<T> {
  if value.is_finite() {
    return Ok(value);
  }
  let value = to_f64(value);
  warn!(step = t, value, "recurrence produced a non-finite value");
  Err(SimulationError::NumericalInstability { step: t, value })
}

pub(crate) fn to_f64<T: FloatExt>(v: T) -> f64 {
  v.to_f64().unwrap_or(f64::NAN)
}

/// Whether every eigenvalue of the companion matrix of `X_t = c_1 X_{t-1} + ... + c_k X_{t-k}`
/// lies strictly inside the unit circle, i.e. every root of `1 - c_1 z - ... - c_k z^k`
/// lies outside it.
pub(crate) fn companion_is_stable<T: FloatExt>(coefs: &Array1<T>) -> bool {
  let k = coefs.len();
  if k == 0 {
    return true;
  }
  if coefs.iter().any(|c| !c.is_finite()) {
    return false;
  }

  let mut companion = DMatrix::<f64>::zeros(k, k);
  for (j, c) in coefs.iter().enumerate() {
    companion[(0, j)] = to_f64(*c);
  }
  for i in 1..k {
    companion[(i, i - 1)] = 1.0;
  }

  companion
    .complex_eigenvalues()
    .iter()
    .all(|lambda| lambda.norm() < 1.0)
}

/// Inverse of one non-seasonal difference: `X[0] = Y[0]`, `X[t] = X[t-1] + Y[t]`.
pub(crate) fn inverse_difference<T: FloatExt>(y: &Array1<T>) -> Result<Array1<T>> {
  inverse_seasonal_difference(y, 1)
}

/// Inverse of one lag-`s` difference: `X[t] = Y[t]` for `t < s`, `X[t] = X[t-s] + Y[t]` after.
pub(crate) fn inverse_seasonal_difference<T: FloatExt>(
  y: &Array1<T>,
  s: usize,
) -> Result<Array1<T>> {
  let n = y.len();
  let mut x = Array1::<T>::zeros(n);
  for t in 0..s.min(n) {
    x[t] = y[t];
  }
  for t in s..n {
    x[t] = ensure_finite(t, x[t - s] + y[t])?;
  }
  Ok(x)
}
