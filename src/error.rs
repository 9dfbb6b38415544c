//! # Errors
//!
//! $$
//! (\text{order}, \theta, n, \varepsilon) \mapsto X \;\big|\; \text{SimulationError}
//! $$
//!
//! Every generator validates its parameters before touching the output buffer and
//! checks each produced value, so a run either returns a fully finite path or one
//! of these errors.

/// Errors raised while building or sampling a process.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
  /// A coefficient vector, initial-value vector or innovation sequence has the wrong length.
  #[error("{name} has length {actual}, expected {expected}")]
  DimensionMismatch {
    /// Name of the offending input.
    name: &'static str,
    /// Length implied by the declared order or sample count.
    expected: usize,
    /// Length actually supplied.
    actual: usize,
  },

  /// Returned when the sample count is zero.
  #[error("sample count must be >= 1, got {n}")]
  InvalidSampleCount {
    /// The invalid sample count.
    n: usize,
  },

  /// A parameter or innovation is NaN or infinite.
  #[error("{name} must be finite, got {value}")]
  NonFiniteParameter {
    /// Name of the offending input.
    name: &'static str,
    /// The non-finite value.
    value: f64,
  },

  /// A GARCH parameter or volatility seed is negative.
  #[error("{name} must be non-negative, got {value}")]
  NegativeParameter {
    /// Name of the offending parameter.
    name: &'static str,
    /// The negative value.
    value: f64,
  },

  #[error("season length must be >= 1")]
  InvalidSeasonLength,

  /// The lag polynomial has a root on or inside the unit circle.
  #[error("{model} coefficients are not stationary")]
  NonStationary {
    /// Model family that failed the check.
    model: &'static str,
  },

  /// The recurrence produced NaN or infinity at `step`.
  #[error("numerical instability at step {step}: produced {value}")]
  NumericalInstability {
    /// Time step at which the value was produced.
    step: usize,
    /// The non-finite value.
    value: f64,
  },

  /// The innovation distribution could not be constructed.
  #[error("invalid innovation distribution: {0}")]
  Distribution(String),
}

impl From<rand_distr::NormalError> for SimulationError {
  fn from(err: rand_distr::NormalError) -> Self {
    SimulationError::Distribution(err.to_string())
  }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
