//! Standard normal distribution functions.
//!
//! The density is closed-form; the CDF is *defined through the integration
//! engine*:
//!
//! Φ(x) = 1/2 + ∫₀ˣ φ(t) dt
//!
//! so its accuracy is entirely a function of the rule and step size carried
//! by the caller's [`IntegrationConfig`].

use num_traits::Float;
use quad_core::IntegrationConfig;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) · exp(−x² / 2)
///
/// Generic over `T: Float` so the same definition serves `f64` and `f32`
/// call sites.
///
/// # Examples
/// ```
/// use risk_models::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Standard normal cumulative distribution function, evaluated by
/// integrating the density from 0 to `x` with the given configuration.
///
/// Φ(0) is exactly 0.5 (the degenerate interval integrates to zero);
/// Φ(x) + Φ(−x) = 1 holds to quadrature accuracy because the reversed-bound
/// integral flips sign.
///
/// # Examples
/// ```
/// use quad_core::{IntegrationConfig, RuleKind};
/// use risk_models::distributions::norm_cdf;
///
/// let config = IntegrationConfig::new(RuleKind::Gauss3, 0.01).unwrap();
/// assert_eq!(norm_cdf(&config, 0.0), 0.5);
/// assert!((norm_cdf(&config, 1.0) - 0.8413447).abs() < 1e-6);
/// ```
#[inline]
pub fn norm_cdf(config: &IntegrationConfig, x: f64) -> f64 {
    0.5 + config.integrate(norm_pdf::<f64>, 0.0, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quad_core::RuleKind;

    fn reference_config() -> IntegrationConfig {
        IntegrationConfig::new(RuleKind::Gauss3, 0.01).unwrap()
    }

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5_f64, 1.0, 1.5, 2.0, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_pdf_f32_compatibility() {
        let result = norm_pdf(0.0_f32);
        assert!((result - 0.3989422).abs() < 1e-5);
    }

    #[test]
    fn test_norm_cdf_at_zero_is_exactly_half() {
        assert_eq!(norm_cdf(&reference_config(), 0.0), 0.5);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let config = reference_config();
        for x in [0.3_f64, 0.5, 1.0, 2.0, 3.5] {
            assert_relative_eq!(
                norm_cdf(&config, x) + norm_cdf(&config, -x),
                1.0,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        let config = reference_config();
        assert_relative_eq!(norm_cdf(&config, 1.0), 0.8413447460685429, epsilon = 1e-9);
        assert_relative_eq!(norm_cdf(&config, -1.0), 0.15865525393145707, epsilon = 1e-9);
        assert_relative_eq!(norm_cdf(&config, 2.0), 0.9772498680518208, epsilon = 1e-9);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let config = reference_config();
        let mut prev = norm_cdf(&config, -4.0);
        for i in -39..=40 {
            let x = f64::from(i) * 0.1;
            let current = norm_cdf(&config, x);
            assert!(current > prev, "CDF not increasing at x = {}", x);
            prev = current;
        }
    }

    #[test]
    fn test_norm_cdf_accuracy_tracks_the_rule() {
        // A one-node endpoint rule at the same step is visibly cruder than
        // gauss3, which is the whole point of carrying the rule explicitly.
        let crude = IntegrationConfig::new(RuleKind::Left, 0.01).unwrap();
        let crude_err = (norm_cdf(&crude, 1.0) - 0.8413447460685429).abs();
        let sharp_err = (norm_cdf(&reference_config(), 1.0) - 0.8413447460685429).abs();
        assert!(crude_err > 100.0 * sharp_err.max(1e-15));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn prop_cdf_symmetry(x in -4.0f64..4.0) {
                let config = reference_config();
                let total = norm_cdf(&config, x) + norm_cdf(&config, -x);
                prop_assert!((total - 1.0).abs() < 1e-6);
            }

            #[test]
            fn prop_cdf_in_unit_interval(x in -8.0f64..8.0) {
                let config = reference_config();
                let p = norm_cdf(&config, x);
                prop_assert!((-1e-9..=1.0 + 1e-9).contains(&p));
            }
        }
    }
}
