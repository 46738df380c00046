//! # quad_core: Composite Quadrature Engine
//!
//! Foundation layer of the quadrisk workspace, providing:
//! - Named quadrature rules on the reference interval [0, 1] (`quadrature::rules`)
//! - Composite integration over subdivided intervals (`quadrature::composite`)
//! - Error types: `QuadratureError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The engine has no dependencies on other quadrisk crates, with minimal
//! external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation of rule identifiers (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use quad_core::quadrature::{integrate, RuleKind};
//!
//! let rule = RuleKind::Simpson.rule();
//!
//! // Simpson has exactness degree 3: x^3 over [0, 2] is reproduced exactly.
//! let estimate = integrate(|t| t * t * t, 0.0, 2.0, 1, &rule).unwrap();
//! assert!((estimate - 4.0).abs() < 1e-12);
//! ```
//!
//! Every operation is a pure function of its explicit arguments; there is no
//! process-wide integration state. Sharing an [`quadrature::IntegrationConfig`]
//! across threads is safe by construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod quadrature;
pub mod types;

pub use quadrature::{integrate, integrate_by_step, IntegrationConfig, QuadratureRule, RuleKind};
pub use types::QuadratureError;
