//! Shared types for the quadrature engine.

pub mod error;

pub use error::QuadratureError;
