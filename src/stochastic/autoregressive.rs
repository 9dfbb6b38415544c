//! # Autoregressive
//!
//! $$
//! X_t = f(X_{t-1}, X_{t-2}, \ldots, \varepsilon_t, \varepsilon_{t-1}, \ldots)
//! $$
//!
//! Every generator here is a single forward pass: step `t` reads only outputs at
//! indices `< t` and innovations at indices `<= t`. Values before the model order are
//! zero seeds (GARCH seeds its volatility with `omega`).
pub mod ar;
pub mod arima;
pub mod arma;
pub(crate) mod common;
pub mod garch;
pub mod ma;
pub mod sarima;

pub use ar::ar;
pub use arma::arma;
pub use garch::garch11;
pub use ma::ma;

#[cfg(test)]
mod tests {
  use ndarray::arr1;
  use ndarray::Array1;

  use super::ar::ARp;
  use super::arima::ARIMA;
  use super::arma::ARMA;
  use super::garch::Garch11;
  use super::ma::MAq;
  use crate::error::SimulationError;
  use crate::traits::ProcessExt;

  #[test]
  fn every_generator_rejects_wrong_innovation_length() {
    let short = Array1::<f64>::zeros(31);
    let is_mismatch = |e: SimulationError| {
      matches!(
        e,
        SimulationError::DimensionMismatch {
          name: "innovations",
          expected: 32,
          actual: 31
        }
      )
    };

    let ar = ARp::<f64>::new(1, arr1(&[0.5]), 32).unwrap();
    assert!(is_mismatch(ar.sample_with_noise(&short).unwrap_err()));
    let ma = MAq::<f64>::new(1, arr1(&[0.5]), 32).unwrap();
    assert!(is_mismatch(ma.sample_with_noise(&short).unwrap_err()));
    let arma = ARMA::<f64>::new(1, 1, arr1(&[0.5]), arr1(&[0.5]), 32).unwrap();
    assert!(is_mismatch(arma.sample_with_noise(&short).unwrap_err()));
    let garch = Garch11::<f64>::new(0.1, 0.1, 0.8, 0.1, 32).unwrap();
    assert!(is_mismatch(garch.sample_with_noise(&short).unwrap_err()));
  }

  #[test]
  fn seeded_sampling_is_reproducible_across_models() {
    let ar = ARp::<f64>::new(2, arr1(&[0.75, -0.25]), 128).unwrap();
    assert_eq!(ar.sample_seeded(1).unwrap(), ar.sample_seeded(1).unwrap());

    let garch = Garch11::<f64>::new(0.05, 0.08, 0.9, 0.1, 128).unwrap();
    assert_eq!(
      garch.sample_seeded(1).unwrap(),
      garch.sample_seeded(1).unwrap()
    );

    let arima = ARIMA::<f64>::new((1, 1, 1), arr1(&[0.2]), arr1(&[0.2]), 128).unwrap();
    assert_ne!(
      arima.sample_seeded(1).unwrap(),
      arima.sample_seeded(2).unwrap()
    );
  }

  #[test]
  fn f32_paths_are_supported() {
    let ar = ARp::<f32>::new(1, arr1(&[0.5f32]), 64).unwrap();
    let path = ar.sample_seeded(3).unwrap();
    assert_eq!(path.len(), 64);
    assert!(path.iter().all(|v| v.is_finite()));

    let garch = Garch11::<f32>::new(0.1, 0.1, 0.8, 0.3, 64).unwrap();
    let path = garch.sample_seeded(3).unwrap();
    assert!(path.sigma.iter().all(|s| *s >= 0.0));
  }
}
