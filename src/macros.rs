//! # Macros
//!
//! $$
//! \text{literal} \mapsto T \in \{f32, f64\}
//! $$
//!

/// Converts a numeric literal into the generic float type in scope.
#[macro_export]
macro_rules! f {
  ($x:expr) => {
    $crate::traits::FloatExt::from_f64_fast($x as f64)
  };
}
