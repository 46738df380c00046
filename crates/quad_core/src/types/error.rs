//! Error types for structured error handling.

use thiserror::Error;

/// Quadrature engine errors.
///
/// All three kinds are detected eagerly at the boundary of the failing call;
/// no partial result is ever produced. Numerical degeneracy (a NaN or Inf
/// integrand value) is deliberately *not* an error kind: it propagates
/// through IEEE arithmetic so callers can detect it with standard
/// floating-point predicates.
///
/// # Variants
/// - `UnknownRule`: rule name not in the fixed registry
/// - `InvalidSubdivisions`: subdivision count of zero
/// - `InvalidStepSize`: non-positive (or NaN) target step size
///
/// # Examples
/// ```
/// use quad_core::types::QuadratureError;
///
/// let err = QuadratureError::UnknownRule { name: "bogus".to_string() };
/// assert!(format!("{}", err).contains("bogus"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuadratureError {
    /// Rule name not in the fixed registry.
    #[error("Unknown quadrature rule: '{name}'")]
    UnknownRule {
        /// The unrecognised rule name
        name: String,
    },

    /// Subdivision count of zero (negative counts are unrepresentable).
    #[error("Invalid subdivision count: N = {count}")]
    InvalidSubdivisions {
        /// The invalid subdivision count
        count: u32,
    },

    /// Non-positive target step size.
    #[error("Invalid step size: dx = {step}")]
    InvalidStepSize {
        /// The invalid step size value
        step: f64,
    },
}
