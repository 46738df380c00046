//! Named quadrature rules on the reference interval [0, 1].
//!
//! A rule is a fixed set of nodes and weights; applied to a subinterval
//! [aᵢ, bᵢ] it approximates the integral as
//!
//! (bᵢ − aᵢ) · Σⱼ wⱼ · f(aᵢ + xⱼ·(bᵢ − aᵢ))
//!
//! The registry is a closed enumeration: the set of valid rule names is
//! centralised here and exhaustively checkable.

use std::fmt;
use std::str::FromStr;

use crate::types::QuadratureError;

/// Identifier of a quadrature rule in the fixed registry.
///
/// # Variants
/// - `Left`/`Right`: single-node endpoint rules (exactness degree 0)
/// - `Middle`: midpoint rule (degree 1)
/// - `Trapezes`: trapezoidal rule (degree 1)
/// - `Simpson`: Simpson's rule (degree 3)
/// - `Gauss2`/`Gauss3`: Gauss-Legendre rules (degrees 3 and 5)
///
/// # Examples
/// ```
/// use quad_core::quadrature::RuleKind;
///
/// let kind: RuleKind = "gauss3".parse().unwrap();
/// assert_eq!(kind, RuleKind::Gauss3);
/// assert!("bogus".parse::<RuleKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleKind {
    /// Left endpoint rule: node {0}, weight {1}
    Left,
    /// Right endpoint rule: node {1}, weight {1}
    Right,
    /// Midpoint rule: node {1/2}, weight {1}
    Middle,
    /// Trapezoidal rule: nodes {0, 1}, weights {1/2, 1/2}
    Trapezes,
    /// Simpson's rule: nodes {0, 1/2, 1}, weights {1/6, 2/3, 1/6}
    Simpson,
    /// Two-point Gauss-Legendre rule
    Gauss2,
    /// Three-point Gauss-Legendre rule
    Gauss3,
}

impl RuleKind {
    /// All rules in the registry, in registry order.
    pub const ALL: [RuleKind; 7] = [
        RuleKind::Left,
        RuleKind::Right,
        RuleKind::Middle,
        RuleKind::Trapezes,
        RuleKind::Simpson,
        RuleKind::Gauss2,
        RuleKind::Gauss3,
    ];

    /// Returns the canonical lowercase name of the rule.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Left => "left",
            RuleKind::Right => "right",
            RuleKind::Middle => "middle",
            RuleKind::Trapezes => "trapezes",
            RuleKind::Simpson => "simpson",
            RuleKind::Gauss2 => "gauss2",
            RuleKind::Gauss3 => "gauss3",
        }
    }

    /// Highest polynomial degree the rule integrates exactly on any
    /// finite interval.
    #[inline]
    pub fn exactness_degree(&self) -> u32 {
        match self {
            RuleKind::Left | RuleKind::Right => 0,
            RuleKind::Middle | RuleKind::Trapezes => 1,
            RuleKind::Simpson | RuleKind::Gauss2 => 3,
            RuleKind::Gauss3 => 5,
        }
    }

    /// Materialises the node/weight table for this rule.
    ///
    /// The constants are closed-form (no numerical fitting); the Gauss
    /// nodes are the Legendre roots mapped from [-1, 1] to [0, 1].
    pub fn rule(&self) -> QuadratureRule {
        let (nodes, weights): (Vec<f64>, Vec<f64>) = match self {
            RuleKind::Left => (vec![0.0], vec![1.0]),
            RuleKind::Right => (vec![1.0], vec![1.0]),
            RuleKind::Middle => (vec![0.5], vec![1.0]),
            RuleKind::Trapezes => (vec![0.0, 1.0], vec![0.5, 0.5]),
            RuleKind::Simpson => (
                vec![0.0, 0.5, 1.0],
                vec![1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0],
            ),
            RuleKind::Gauss2 => {
                let offset = 1.0 / (2.0 * 3.0_f64.sqrt());
                (vec![0.5 - offset, 0.5 + offset], vec![0.5, 0.5])
            }
            RuleKind::Gauss3 => {
                let offset = 0.5 * (3.0_f64 / 5.0).sqrt();
                (
                    vec![0.5 - offset, 0.5, 0.5 + offset],
                    vec![5.0 / 18.0, 4.0 / 9.0, 5.0 / 18.0],
                )
            }
        };

        QuadratureRule {
            name: self.name(),
            nodes,
            weights,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(RuleKind::Left),
            "right" => Ok(RuleKind::Right),
            "middle" => Ok(RuleKind::Middle),
            "trapezes" => Ok(RuleKind::Trapezes),
            "simpson" => Ok(RuleKind::Simpson),
            "gauss2" => Ok(RuleKind::Gauss2),
            "gauss3" => Ok(RuleKind::Gauss3),
            other => Err(QuadratureError::UnknownRule {
                name: other.to_string(),
            }),
        }
    }
}

/// An immutable named set of nodes and weights on the reference
/// interval [0, 1].
///
/// Invariants (guaranteed by construction through [`RuleKind::rule`]):
/// - `nodes.len() == weights.len() >= 1`
/// - every node lies in [0, 1]
/// - the weights sum to 1, so a constant integrand over the unit interval
///   is reproduced exactly
///
/// # Examples
/// ```
/// use quad_core::quadrature::QuadratureRule;
///
/// let rule = QuadratureRule::from_name("simpson").unwrap();
/// assert_eq!(rule.name(), "simpson");
/// assert_eq!(rule.nodes().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule {
    name: &'static str,
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl QuadratureRule {
    /// Looks up `name` in the registry and materialises the rule.
    ///
    /// # Errors
    /// `QuadratureError::UnknownRule` if `name` is not one of the seven
    /// recognised identifiers.
    pub fn from_name(name: &str) -> Result<Self, QuadratureError> {
        name.parse::<RuleKind>().map(|kind| kind.rule())
    }

    /// Returns the rule's canonical name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the nodes on the reference interval [0, 1].
    #[inline]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Returns the weights, in node order.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
