//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced by the command-line layer.
///
/// Engine and model failures are wrapped rather than swallowed: a failed
/// rule lookup or invalid parameter propagates out of `main` as a non-zero
/// exit instead of printing a message and exiting cleanly.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument combination.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reading a parameter file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure parsing a JSON parameter file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the integration engine.
    #[error(transparent)]
    Quadrature(#[from] quad_core::QuadratureError),

    /// Error from the applied-probability layer.
    #[error(transparent)]
    Model(#[from] risk_models::ModelError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
