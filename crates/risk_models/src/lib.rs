//! # Risk Models (Applied Probability Layer)
//!
//! Distributions of derived random variables, expressed purely as calls
//! into the `quad_core` integration engine.
//!
//! This crate provides:
//! - Standard normal density and an integration-backed normal CDF
//! - Log-normal insured-client claim distributions
//! - The two-claim convolution (nested double integration)
//! - Option pricing through the integration-backed CDF
//!
//! ## Design Principles
//!
//! - **Explicit configuration**: every CDF takes an immutable
//!   [`quad_core::IntegrationConfig`]; there is no ambient rule or step size
//! - **Closures over shared slots**: the convolution's inner integrand
//!   captures its outer variable by value at construction time, so
//!   evaluations at distinct points never interfere

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod claims;
pub mod distributions;
pub mod error;
pub mod options;

pub use claims::{ClaimDistribution, InsuredClient};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::ModelError;
pub use options::{OptionContract, OptionKind};
