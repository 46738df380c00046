//! Option pricing through the integration-backed normal CDF.
//!
//! Prices a European call or put under log-normal dynamics with drift μ
//! (undiscounted convention):
//!
//! - call: S·e^{μT}·Φ(σ√T − z₀) − K·Φ(−z₀)
//! - put:  K·Φ(z₀) − S·e^{μT}·Φ(z₀ − σ√T)
//!
//! where z₀ = (ln(K/S) − T(μ − σ²/2)) / (σ√T). Every Φ evaluation is an
//! integration of the normal density under the caller's configuration; no
//! erf approximation is involved.

use quad_core::IntegrationConfig;

use crate::distributions::norm_cdf;
use crate::error::ModelError;

/// Side of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

/// A European option contract under log-normal dynamics.
///
/// # Examples
/// ```
/// use quad_core::{IntegrationConfig, RuleKind};
/// use risk_models::{OptionContract, OptionKind};
///
/// let config = IntegrationConfig::new(RuleKind::Gauss3, 0.01).unwrap();
/// let call = OptionContract::new(100.0, 100.0, 1.0, 0.0, 0.2, OptionKind::Call).unwrap();
/// assert!(call.price(&config) > 0.0);
///
/// // Parameters are validated up front
/// assert!(OptionContract::new(-100.0, 100.0, 1.0, 0.0, 0.2, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to maturity in years (T)
    expiry: f64,
    /// Drift of the underlying (μ)
    drift: f64,
    /// Volatility (σ)
    volatility: f64,
    /// Call or put
    kind: OptionKind,
}

impl OptionContract {
    /// Creates a contract, validating the parameters.
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if `spot <= 0`
    /// - `ModelError::InvalidStrike` if `strike <= 0`
    /// - `ModelError::InvalidExpiry` if `expiry <= 0`
    /// - `ModelError::InvalidVolatility` if `volatility <= 0`
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        drift: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self, ModelError> {
        if !(spot > 0.0) {
            return Err(ModelError::InvalidSpot { spot });
        }
        if !(strike > 0.0) {
            return Err(ModelError::InvalidStrike { strike });
        }
        if !(expiry > 0.0) {
            return Err(ModelError::InvalidExpiry { expiry });
        }
        if !(volatility > 0.0) {
            return Err(ModelError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            drift,
            volatility,
            kind,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the drift.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the contract side.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// The standardised log-moneyness threshold:
    /// z₀ = (ln(K/S) − T(μ − σ²/2)) / (σ√T).
    #[inline]
    pub fn z0(&self) -> f64 {
        let variance_drift = self.drift - self.volatility * self.volatility / 2.0;
        ((self.strike / self.spot).ln() - self.expiry * variance_drift)
            / (self.volatility * self.expiry.sqrt())
    }

    /// Prices the contract with the given integration configuration.
    pub fn price(&self, config: &IntegrationConfig) -> f64 {
        let z0 = self.z0();
        let vol_sqrt_t = self.volatility * self.expiry.sqrt();
        let forward = self.spot * (self.drift * self.expiry).exp();

        match self.kind {
            OptionKind::Call => {
                forward * norm_cdf(config, vol_sqrt_t - z0) - self.strike * norm_cdf(config, -z0)
            }
            OptionKind::Put => {
                self.strike * norm_cdf(config, z0) - forward * norm_cdf(config, z0 - vol_sqrt_t)
            }
        }
    }
}
