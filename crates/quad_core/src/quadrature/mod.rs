//! Quadrature rules and composite integration.
//!
//! This module provides:
//! - `rules`: named node/weight tables on the reference interval [0, 1]
//! - `composite`: composite application of a rule over subdivided intervals

pub mod composite;
pub mod rules;

// Re-export main types at module level
pub use composite::{integrate, integrate_by_step, IntegrationConfig};
pub use rules::{QuadratureRule, RuleKind};
