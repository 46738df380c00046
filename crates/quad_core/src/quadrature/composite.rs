//! Composite application of a quadrature rule over subdivided intervals.
//!
//! ∫ₐᵇ f(t) dt is approximated by splitting [a, b] into N equal-width
//! subintervals and summing the rule's estimate on each. Accuracy is entirely
//! a function of rule choice and subdivision density; there is no adaptive
//! refinement and no error estimate.
//!
//! ## Numerical Semantics
//!
//! Double-precision throughout. NaN or Inf values produced by the integrand
//! propagate through IEEE arithmetic into the total; they are never detected
//! or reported as errors.

use crate::quadrature::rules::{QuadratureRule, RuleKind};
use crate::types::QuadratureError;

/// Rule estimate on a single subinterval [aᵢ, bᵢ].
///
/// Maps each reference node x to the sample point aᵢ + x·(bᵢ − aᵢ),
/// weights the samples, and scales by (bᵢ − aᵢ), the Jacobian of mapping
/// the reference interval onto the physical subinterval. The signed width
/// is what makes reversed bounds flip the sign of the estimate.
#[inline]
fn element_estimate<F>(f: &F, a_i: f64, b_i: f64, rule: &QuadratureRule) -> f64
where
    F: Fn(f64) -> f64,
{
    let width = b_i - a_i;
    let mut acc = 0.0;
    for (&x, &w) in rule.nodes().iter().zip(rule.weights()) {
        acc += w * f(a_i + x * width);
    }
    acc * width
}

/// Composite sum over `n` equal subintervals. `n` has already been
/// validated (or derived) as positive by the caller.
fn composite_sum<F>(f: &F, a: f64, b: f64, n: u32, rule: &QuadratureRule) -> f64
where
    F: Fn(f64) -> f64,
{
    let width = (b - a) / f64::from(n);
    let mut total = 0.0;
    for i in 0..n {
        let a_i = a + f64::from(i) * width;
        let b_i = a + f64::from(i + 1) * width;
        total += element_estimate(f, a_i, b_i, rule);
    }
    total
}

/// Derives a subdivision count from a target step size, clamped to a
/// minimum of 1. Uses the magnitude |b − a| so that reversed bounds still
/// produce a sane positive count.
#[inline]
fn subdivisions_for_step(a: f64, b: f64, step: f64) -> u32 {
    let count = ((b - a).abs() / step).round();
    (count.min(f64::from(u32::MAX)) as u32).max(1)
}

/// Approximates ∫ₐᵇ f(t) dt with `n` equal subdivisions of [a, b].
///
/// # Arguments
/// * `f` - Integrand, a pure mapping from real to real
/// * `a` - Lower bound
/// * `b` - Upper bound (if `b < a` the result is the negative of
///   integrating over the reversed interval)
/// * `n` - Number of subdivisions (must be positive)
/// * `rule` - Quadrature rule applied on each subdivision
///
/// # Errors
/// `QuadratureError::InvalidSubdivisions` if `n == 0`.
///
/// # Examples
/// ```
/// use quad_core::quadrature::{integrate, RuleKind};
///
/// let rule = RuleKind::Trapezes.rule();
/// let estimate = integrate(|t| t, 0.0, 1.0, 10, &rule).unwrap();
/// assert!((estimate - 0.5).abs() < 1e-12);
///
/// // Degenerate interval
/// assert_eq!(integrate(|t| t.exp(), 2.0, 2.0, 10, &rule).unwrap(), 0.0);
/// ```
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    n: u32,
    rule: &QuadratureRule,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(QuadratureError::InvalidSubdivisions { count: n });
    }
    Ok(composite_sum(&f, a, b, n, rule))
}

/// Approximates ∫ₐᵇ f(t) dt with a subdivision count derived from a
/// target step size: N = round(|b − a| / step), clamped to at least 1.
///
/// The result is the exact floating-point result of [`integrate`] with the
/// derived count.
///
/// # Errors
/// `QuadratureError::InvalidStepSize` if `step` is not strictly positive.
///
/// # Examples
/// ```
/// use quad_core::quadrature::{integrate_by_step, RuleKind};
///
/// let rule = RuleKind::Simpson.rule();
/// let estimate = integrate_by_step(|t| t * t, 0.0, 1.0, 0.1, &rule).unwrap();
/// assert!((estimate - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn integrate_by_step<F>(
    f: F,
    a: f64,
    b: f64,
    step: f64,
    rule: &QuadratureRule,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if !(step > 0.0) {
        return Err(QuadratureError::InvalidStepSize { step });
    }
    Ok(composite_sum(&f, a, b, subdivisions_for_step(a, b, step), rule))
}

/// Immutable integration configuration: a materialised rule plus a target
/// step size.
///
/// Replaces ambient mutable integration state: the configuration is
/// validated once at construction and passed explicitly to every call site,
/// so every integration is a pure function of its arguments and sharing a
/// config across threads is safe by construction.
///
/// # Examples
/// ```
/// use quad_core::quadrature::{IntegrationConfig, RuleKind};
///
/// let config = IntegrationConfig::new(RuleKind::Gauss3, 0.01).unwrap();
/// let estimate = config.integrate(|t| t.cos(), 0.0, 1.0);
/// assert!((estimate - 1.0_f64.sin()).abs() < 1e-9);
///
/// // Step size is validated up front
/// assert!(IntegrationConfig::new(RuleKind::Gauss3, 0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IntegrationConfig {
    kind: RuleKind,
    rule: QuadratureRule,
    step: f64,
}

impl IntegrationConfig {
    /// Creates a configuration from a rule identifier and a target step
    /// size.
    ///
    /// # Errors
    /// `QuadratureError::InvalidStepSize` if `step` is not strictly
    /// positive.
    pub fn new(kind: RuleKind, step: f64) -> Result<Self, QuadratureError> {
        if !(step > 0.0) {
            return Err(QuadratureError::InvalidStepSize { step });
        }
        Ok(Self {
            kind,
            rule: kind.rule(),
            step,
        })
    }

    /// Creates a configuration from a rule *name* and a target step size.
    ///
    /// # Errors
    /// `QuadratureError::UnknownRule` for an unrecognised name,
    /// `QuadratureError::InvalidStepSize` for a non-positive step.
    pub fn from_name(name: &str, step: f64) -> Result<Self, QuadratureError> {
        Self::new(name.parse()?, step)
    }

    /// Returns the rule identifier.
    #[inline]
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns the materialised rule.
    #[inline]
    pub fn rule(&self) -> &QuadratureRule {
        &self.rule
    }

    /// Returns the target step size.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Approximates ∫ₐᵇ f(t) dt with this configuration.
    ///
    /// Infallible: the step size was validated at construction and the
    /// derived subdivision count is clamped to at least 1.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        composite_sum(&f, a, b, subdivisions_for_step(a, b, self.step), &self.rule)
    }
}
