//! Log-normal claim distributions for an insured client.
//!
//! A client's single-claim reimbursement X is log-normal with location m and
//! scale s. The client files 0, 1 or 2 claims with probabilities
//! (p₀, p₁, p₂), so the aggregate reimbursement S has CDF
//!
//! F_S(x) = p₀ + p₁·F_X(x) + p₂·F_{X₁+X₂}(x)
//!
//! The two-claim distribution is evaluated by nested integration: the
//! density of X₁+X₂ is the convolution integral
//!
//! f_{X₁+X₂}(x) = ∫₀ˣ f_X(x−t)·f_X(t) dt
//!
//! and its CDF integrates that density once more. Every inner integrand is a
//! closure that captures the outer variable by value at construction time,
//! so evaluations at distinct points are independent and can run in
//! parallel.

use quad_core::IntegrationConfig;

use crate::distributions::{norm_cdf, norm_pdf};
use crate::error::ModelError;

/// Log-normal claim parameters of an insured client, plus the claim-count
/// probability mass.
///
/// # Examples
/// ```
/// use risk_models::InsuredClient;
///
/// let client = InsuredClient::new(7.0, 1.5, [0.5, 0.3, 0.2]).unwrap();
/// assert_eq!(client.location(), 7.0);
///
/// // Scale must be positive, probabilities must form a distribution.
/// assert!(InsuredClient::new(7.0, 0.0, [0.5, 0.3, 0.2]).is_err());
/// assert!(InsuredClient::new(7.0, 1.5, [0.5, 0.3, 0.3]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsuredClient {
    /// Log-normal location parameter (m)
    location: f64,
    /// Log-normal scale parameter (s)
    scale: f64,
    /// Probabilities of 0, 1 and 2 claims
    claim_probs: [f64; 3],
}

impl InsuredClient {
    /// Creates a client record, validating the parameters.
    ///
    /// # Errors
    /// - `ModelError::InvalidScale` if `scale <= 0`
    /// - `ModelError::InvalidClaimProbabilities` if any entry is negative or
    ///   the entries do not sum to 1 (within 1e-9)
    pub fn new(location: f64, scale: f64, claim_probs: [f64; 3]) -> Result<Self, ModelError> {
        if !(scale > 0.0) {
            return Err(ModelError::InvalidScale { scale });
        }

        let [p0, p1, p2] = claim_probs;
        let total = p0 + p1 + p2;
        // NaN-rejecting form: a NaN entry fails the non-negativity test and
        // a NaN total fails the sum test.
        if !(p0 >= 0.0 && p1 >= 0.0 && p2 >= 0.0 && (total - 1.0).abs() <= 1e-9) {
            return Err(ModelError::InvalidClaimProbabilities { p0, p1, p2 });
        }

        Ok(Self {
            location,
            scale,
            claim_probs,
        })
    }

    /// Returns the log-normal location parameter.
    #[inline]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Returns the log-normal scale parameter.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the claim-count probability mass (p₀, p₁, p₂).
    #[inline]
    pub fn claim_probs(&self) -> [f64; 3] {
        self.claim_probs
    }
}

/// Claim distributions of a client under a fixed integration
/// configuration.
///
/// Immutable after construction; shared references can be used from
/// multiple threads (each evaluation is a pure function of its arguments).
///
/// # Examples
/// ```
/// use quad_core::{IntegrationConfig, RuleKind};
/// use risk_models::{ClaimDistribution, InsuredClient};
///
/// let client = InsuredClient::new(7.0, 1.5, [0.5, 0.3, 0.2]).unwrap();
/// let config = IntegrationConfig::new(RuleKind::Gauss3, 0.01).unwrap();
/// let dist = ClaimDistribution::new(client, config);
///
/// assert_eq!(dist.claim_cdf(0.0), 0.0);
/// assert!(dist.claim_cdf(1000.0) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ClaimDistribution {
    client: InsuredClient,
    config: IntegrationConfig,
}

impl ClaimDistribution {
    /// Binds a client record to an integration configuration.
    pub fn new(client: InsuredClient, config: IntegrationConfig) -> Self {
        Self { client, config }
    }

    /// Returns the client record.
    #[inline]
    pub fn client(&self) -> &InsuredClient {
        &self.client
    }

    /// Returns the integration configuration.
    #[inline]
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// Density of a single claim X: the log-normal pdf
    /// f_X(x) = φ((ln x − m)/s) / (s·x), and 0 for x ≤ 0.
    pub fn claim_density(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.ln() - self.client.location) / self.client.scale;
        norm_pdf(z) / (self.client.scale * x)
    }

    /// CDF of a single claim X: Φ((ln x − m)/s), and 0 for x ≤ 0.
    ///
    /// Φ is the integration-backed normal CDF, so the accuracy of this
    /// value tracks the distribution's configuration.
    pub fn claim_cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.ln() - self.client.location) / self.client.scale;
        norm_cdf(&self.config, z)
    }

    /// Density of the two-claim sum X₁+X₂ at `x`: the convolution integral
    /// ∫₀ˣ f_X(x−t)·f_X(t) dt, and 0 for x ≤ 0.
    ///
    /// The integrand closes over `x` by value, so each call builds its own
    /// correctly-parameterised one-argument function; repeated or
    /// re-entrant evaluations at different points never interfere.
    pub fn two_claims_density(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.config
            .integrate(|t| self.claim_density(x - t) * self.claim_density(t), 0.0, x)
    }

    /// CDF of the two-claim sum X₁+X₂ at `x`, and 0 for x ≤ 0.
    ///
    /// Nested double integration: every outer sample point performs a full
    /// inner convolution integral, giving O(N_outer · N_inner) evaluations
    /// of the single-claim density. This is the dominant cost of the
    /// aggregate CDF; callers bound wall-clock cost through the
    /// configuration's step size.
    pub fn two_claims_cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.config
            .integrate(|u| self.two_claims_density(u), 0.0, x)
    }

    /// CDF of the aggregate reimbursement S at `x`:
    /// p₀ + p₁·F_X(x) + p₂·F_{X₁+X₂}(x), and 0 for x ≤ 0.
    pub fn aggregate_cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let [p0, p1, p2] = self.client.claim_probs;
        p0 + p1 * self.claim_cdf(x) + p2 * self.two_claims_cdf(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quad_core::RuleKind;

    fn test_client() -> InsuredClient {
        InsuredClient::new(7.0, 1.5, [0.5, 0.3, 0.2]).unwrap()
    }

    /// Fine configuration: cheap for single integrals, far too dense for
    /// the nested double integration.
    fn fine() -> ClaimDistribution {
        ClaimDistribution::new(
            test_client(),
            IntegrationConfig::new(RuleKind::Gauss3, 0.01).unwrap(),
        )
    }

    /// Coarse configuration sized for the O(N²) nested integrals.
    fn coarse() -> ClaimDistribution {
        ClaimDistribution::new(
            test_client(),
            IntegrationConfig::new(RuleKind::Simpson, 25.0).unwrap(),
        )
    }

    #[test]
    fn test_client_validation() {
        assert!(InsuredClient::new(7.0, -1.5, [0.5, 0.3, 0.2]).is_err());
        assert!(InsuredClient::new(7.0, f64::NAN, [0.5, 0.3, 0.2]).is_err());
        assert!(InsuredClient::new(7.0, 1.5, [-0.1, 0.9, 0.2]).is_err());
        assert!(InsuredClient::new(7.0, 1.5, [0.4, 0.3, 0.2]).is_err());
        assert!(InsuredClient::new(7.0, 1.5, [1.0, 0.0, 0.0]).is_ok());
    }

    #[test]
    fn test_nan_claim_probabilities_are_rejected() {
        // A NaN entry poisons both the sign test and the sum; the
        // constructor must reject it rather than silently accept it.
        assert!(InsuredClient::new(7.0, 1.5, [f64::NAN, 0.5, 0.5]).is_err());
        assert!(InsuredClient::new(7.0, 1.5, [0.5, f64::NAN, 0.5]).is_err());
        assert!(InsuredClient::new(7.0, 1.5, [0.5, 0.5, f64::NAN]).is_err());
        assert!(InsuredClient::new(7.0, 1.5, [f64::NAN, f64::NAN, f64::NAN]).is_err());
    }

    #[test]
    fn test_claim_density_zero_for_non_positive_x() {
        let dist = fine();
        assert_eq!(dist.claim_density(0.0), 0.0);
        assert_eq!(dist.claim_density(-5.0), 0.0);
        assert_eq!(dist.claim_cdf(0.0), 0.0);
        assert_eq!(dist.claim_cdf(-5.0), 0.0);
    }

    #[test]
    fn test_claim_density_is_finite_and_non_negative() {
        let dist = fine();
        for x in [1e-6, 0.1, 10.0, 1096.6, 1e5, 1e8] {
            let d = dist.claim_density(x);
            assert!(d.is_finite() && d >= 0.0, "density at {} was {}", x, d);
        }
    }

    #[test]
    fn test_claim_cdf_at_the_median() {
        // The log-normal median is exp(m): F_X(e^7) = 1/2.
        let dist = fine();
        assert_relative_eq!(dist.claim_cdf(7.0_f64.exp()), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_claim_cdf_matches_integrated_density() {
        // ∫₀ˣ f_X = F_X(x): ties the closed-form CDF to the density through
        // the engine itself.
        let dist = fine();
        let x = 7.0_f64.exp();
        let integrated = dist
            .config()
            .integrate(|t| dist.claim_density(t), 1e-12, x);
        assert_relative_eq!(integrated, dist.claim_cdf(x), epsilon = 1e-4);
    }

    #[test]
    fn test_two_claims_density_zero_for_non_positive_x() {
        let dist = coarse();
        assert_eq!(dist.two_claims_density(0.0), 0.0);
        assert_eq!(dist.two_claims_density(-1.0), 0.0);
        assert_eq!(dist.two_claims_cdf(0.0), 0.0);
        assert_eq!(dist.two_claims_cdf(-1.0), 0.0);
    }

    #[test]
    fn test_two_claims_density_finite_and_non_negative() {
        let dist = coarse();
        for x in [50.0, 200.0, 1000.0, 3000.0, 10000.0] {
            let d = dist.two_claims_density(x);
            assert!(d.is_finite() && d >= 0.0, "density at {} was {}", x, d);
        }
    }

    #[test]
    fn test_two_claims_cdf_is_monotone() {
        let dist = coarse();
        let mut prev = 0.0;
        for x in [100.0, 500.0, 1000.0, 2000.0, 4000.0] {
            let current = dist.two_claims_cdf(x);
            assert!(current.is_finite());
            assert!(
                current >= prev,
                "two-claim CDF decreased at x = {}: {} < {}",
                x,
                current,
                prev
            );
            prev = current;
        }
    }

    #[test]
    fn test_repeated_evaluations_are_independent() {
        // No hidden per-call state: evaluating at x1, then x2, then x1
        // again reproduces the first result bit-for-bit.
        let dist = coarse();
        let first = dist.two_claims_density(800.0);
        let _other = dist.two_claims_density(1234.5);
        assert_eq!(dist.two_claims_density(800.0), first);
    }

    #[test]
    fn test_parallel_evaluations_match_sequential() {
        let dist = coarse();
        let xs = [300.0, 900.0, 1500.0, 2500.0];
        let sequential: Vec<f64> = xs.iter().map(|&x| dist.two_claims_cdf(x)).collect();

        let parallel: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = xs
                .iter()
                .map(|&x| {
                    let dist = &dist;
                    scope.spawn(move || dist.two_claims_cdf(x))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_aggregate_cdf_anchors_at_p0() {
        let dist = fine();
        // Far below the support's bulk the claim CDFs vanish and only the
        // zero-claim mass remains.
        assert_relative_eq!(dist.aggregate_cdf(1e-9), 0.5, epsilon = 1e-9);
        assert_eq!(dist.aggregate_cdf(0.0), 0.0);
        assert_eq!(dist.aggregate_cdf(-10.0), 0.0);
    }

    #[test]
    fn test_aggregate_cdf_is_monotone_and_bounded() {
        let dist = coarse();
        let mut prev = 0.0;
        for x in [100.0, 500.0, 1000.0, 2000.0, 4000.0] {
            let current = dist.aggregate_cdf(x);
            assert!(current >= prev, "aggregate CDF decreased at x = {}", x);
            assert!(current <= 1.0 + 1e-3, "aggregate CDF above 1 at x = {}", x);
            prev = current;
        }
    }
}
