use ndarray::Array1;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::Result;
use crate::error::SimulationError;
use crate::traits::FloatExt;

/// Gaussian white noise of length `n`. Defaults to the standard normal.
#[derive(Debug, Copy, Clone)]
pub struct Wn<T: FloatExt> {
  pub n: usize,
  pub mean: Option<T>,
  pub std_dev: Option<T>,
}

impl<T: FloatExt> Wn<T> {
  pub fn new(n: usize, mean: Option<T>, std_dev: Option<T>) -> Self {
    Wn { n, mean, std_dev }
  }

  /// Draws the innovation sequence from `rng`.
  pub fn sample_using<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Array1<T>> {
    let mean = self.mean.unwrap_or(f!(0));
    if !mean.is_finite() {
      return Err(SimulationError::NonFiniteParameter {
        name: "mean",
        value: mean.to_f64().unwrap_or(f64::NAN),
      });
    }
    let std_dev = self.std_dev.unwrap_or(f!(1));
    if !std_dev.is_finite() {
      return Err(SimulationError::NonFiniteParameter {
        name: "std_dev",
        value: std_dev.to_f64().unwrap_or(f64::NAN),
      });
    }
    if std_dev < T::zero() {
      return Err(SimulationError::NegativeParameter {
        name: "std_dev",
        value: std_dev.to_f64().unwrap_or(f64::NAN),
      });
    }
    T::normal_array(self.n, mean, std_dev, rng)
  }

  /// Draws the innovation sequence from a fresh `StdRng` seeded with `seed`.
  pub fn sample_seeded(&self, seed: u64) -> Result<Array1<T>> {
    let mut rng = StdRng::seed_from_u64(seed);
    self.sample_using(&mut rng)
  }
}

/// `n` draws of \(\mathcal{N}(0, 1)\) from a `StdRng` seeded with `seed`.
pub fn standard_normal<T: FloatExt>(n: usize, seed: u64) -> Result<Array1<T>> {
  Wn::new(n, None, None).sample_seeded(seed)
}
