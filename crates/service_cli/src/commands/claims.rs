//! Claims command implementation
//!
//! Tabulates a client's single-claim CDF, two-claim convolution density and
//! CDF, and the aggregate-claims CDF over a range of reimbursement levels.
//! The rows are independent pure computations, so they are evaluated in
//! parallel with rayon.

use quad_core::IntegrationConfig;
use rayon::prelude::*;
use risk_models::{ClaimDistribution, InsuredClient};
use tracing::info;

use crate::{CliError, Result};

/// Run the claims command
#[allow(clippy::too_many_arguments)]
pub fn run(
    client_file: Option<&str>,
    location: f64,
    scale: f64,
    claim_probs: [f64; 3],
    from: f64,
    to: f64,
    points: usize,
    rule: &str,
    step: f64,
) -> Result<()> {
    let client = match client_file {
        Some(path) => {
            info!("Loading client from {}", path);
            let text = std::fs::read_to_string(path)?;
            let loaded: InsuredClient = serde_json::from_str(&text)?;
            // Deserialisation bypasses the validating constructor.
            InsuredClient::new(loaded.location(), loaded.scale(), loaded.claim_probs())?
        }
        None => InsuredClient::new(location, scale, claim_probs)?,
    };

    if points == 0 {
        return Err(CliError::InvalidArgument(
            "at least one tabulation point is required".to_string(),
        ));
    }
    if !(to > from) {
        return Err(CliError::InvalidArgument(format!(
            "empty tabulation range: from = {}, to = {}",
            from, to
        )));
    }

    let config = IntegrationConfig::from_name(rule, step)?;
    let dist = ClaimDistribution::new(client, config);

    info!(
        "Tabulating claim distributions with rule '{}' and step {}",
        rule, step
    );

    let spacing = if points > 1 {
        (to - from) / (points - 1) as f64
    } else {
        0.0
    };
    let xs: Vec<f64> = (0..points).map(|i| from + spacing * i as f64).collect();

    // Each row performs an independent nested integration.
    let rows: Vec<(f64, f64, f64, f64, f64)> = xs
        .par_iter()
        .map(|&x| {
            (
                x,
                dist.claim_cdf(x),
                dist.two_claims_density(x),
                dist.two_claims_cdf(x),
                dist.aggregate_cdf(x),
            )
        })
        .collect();

    println!(
        "\n{:>12} {:>12} {:>14} {:>12} {:>12}",
        "x", "F_X", "f_X1+X2", "F_X1+X2", "F_S"
    );
    for (x, fx, dsum, fsum, fs) in rows {
        println!(
            "{:>12.2} {:>12.6} {:>14.8} {:>12.6} {:>12.6}",
            x, fx, dsum, fsum, fs
        );
    }

    Ok(())
}
