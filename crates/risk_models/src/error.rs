//! Error types for the applied-probability layer.

use quad_core::QuadratureError;
use thiserror::Error;

/// Model parameter and configuration errors.
///
/// # Variants
/// - `InvalidSpot` / `InvalidStrike` / `InvalidExpiry` / `InvalidVolatility`:
///   non-positive option parameters
/// - `InvalidScale`: non-positive log-normal scale parameter
/// - `InvalidClaimProbabilities`: claim-count mass with negative entries or
///   not summing to 1
/// - `Quadrature`: an error surfaced by the integration engine
///
/// # Examples
/// ```
/// use risk_models::ModelError;
///
/// let err = ModelError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid log-normal scale parameter (non-positive).
    #[error("Invalid claim scale parameter: s = {scale}")]
    InvalidScale {
        /// The invalid scale value
        scale: f64,
    },

    /// Claim-count probability mass is not a distribution.
    #[error("Invalid claim probabilities: [{p0}, {p1}, {p2}] must be non-negative and sum to 1")]
    InvalidClaimProbabilities {
        /// Probability of zero claims
        p0: f64,
        /// Probability of one claim
        p1: f64,
        /// Probability of two claims
        p2: f64,
    },

    /// Error surfaced by the integration engine.
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}
