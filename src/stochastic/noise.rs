//! # Noise
//!
//! $$
//! \varepsilon_t \overset{iid}{\sim} \mathcal{N}(\mu, \sigma^2), \quad t = 0, \ldots, n-1
//! $$
//!
pub mod wn;

pub use wn::standard_normal;
