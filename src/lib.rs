//! # tsgen
//!
//! $$
//! (\text{order}, \theta, n, \varepsilon_{0:n}) \mapsto X_{0:n}
//! $$
//!
//! Reproducible sample-path generators for the classical discrete-time model families:
//! AR(p), MA(q), ARMA(p,q), ARIMA(p,d,q), SARIMA(p,d,q)(P,D,Q)_s and GARCH(1,1).
//!
//! | Module         | Description                                                   |
//! |----------------|---------------------------------------------------------------|
//! | [`stochastic`] | Generators and innovation sources.                            |
//! | [`stats`]      | Descriptive summaries of generated paths.                     |
//! | [`traits`]     | `FloatExt` scalar bound and the `ProcessExt` sampling trait.  |
//! | [`error`]      | `SimulationError` and the crate `Result` alias.               |
//!
//! Generators are pure functions of their parameters and an explicit innovation
//! sequence; fitting, diagnostics and plotting are left to downstream tools.

#[macro_use]
mod macros;

pub mod error;
pub mod stats;
pub mod stochastic;
pub mod traits;

pub use error::Result;
pub use error::SimulationError;
