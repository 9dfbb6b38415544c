//! # Traits
//!
//! $$
//! \text{Trait contracts: }\mathcal{P}:(\theta, \varepsilon_{0:n})\to X_{0:n}
//! $$
//!
use std::fmt::Debug;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::AddAssign;
use std::ops::SubAssign;

use ndarray::Array1;
use ndarray::ScalarOperand;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::error::Result;
use crate::stochastic::noise::wn::Wn;

pub trait FloatExt:
  num_traits::Float
  + num_traits::FromPrimitive
  + Sum
  + Default
  + Debug
  + Display
  + Send
  + Sync
  + ScalarOperand
  + AddAssign
  + SubAssign
  + 'static
{
  fn from_f64_fast(v: f64) -> Self;

  fn from_usize_(n: usize) -> Self;

  /// Draws `n` i.i.d. normal values from `rng`.
  fn normal_array<R: Rng + ?Sized>(
    n: usize,
    mean: Self,
    std_dev: Self,
    rng: &mut R,
  ) -> Result<Array1<Self>>;
}

/// A discrete-time process whose path is a deterministic function of its innovations.
///
/// Implementors only provide [`ProcessExt::sample_with_noise`]; every random entry point
/// draws a standard-normal innovation sequence from an explicit RNG and delegates to it,
/// so there is no hidden global random state.
pub trait ProcessExt<T: FloatExt>: Send + Sync {
  type Output: Send;

  /// Path length.
  fn n(&self) -> usize;

  /// Runs the recurrence over an explicit innovation sequence of length [`ProcessExt::n`].
  fn sample_with_noise(&self, noise: &Array1<T>) -> Result<Self::Output>;

  fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output> {
    let noise = Wn::<T>::new(self.n(), None, None).sample_using(rng)?;
    self.sample_with_noise(&noise)
  }

  fn sample_seeded(&self, seed: u64) -> Result<Self::Output> {
    let mut rng = StdRng::seed_from_u64(seed);
    self.sample_with_rng(&mut rng)
  }

  /// Samples `m` independent paths in parallel. Path `i` is seeded with `seed + i`,
  /// so the batch does not depend on thread scheduling.
  fn sample_par(&self, m: usize, seed: u64) -> Result<Vec<Self::Output>> {
    (0..m)
      .into_par_iter()
      .map(|i| self.sample_seeded(seed.wrapping_add(i as u64)))
      .collect()
  }
}
