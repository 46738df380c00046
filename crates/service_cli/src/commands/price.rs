//! Price command implementation
//!
//! Prices a European option from CLI flags or a JSON contract file, with
//! every normal-CDF evaluation performed by the integration engine.

use quad_core::IntegrationConfig;
use risk_models::{OptionContract, OptionKind};
use tracing::info;

use crate::{CliError, Result};

/// Run the price command
#[allow(clippy::too_many_arguments)]
pub fn run(
    contract_file: Option<&str>,
    spot: f64,
    strike: f64,
    expiry: f64,
    drift: f64,
    volatility: f64,
    kind: &str,
    rule: &str,
    step: f64,
) -> Result<()> {
    let contract = match contract_file {
        Some(path) => {
            info!("Loading contract from {}", path);
            let text = std::fs::read_to_string(path)?;
            let loaded: OptionContract = serde_json::from_str(&text)?;
            // Deserialisation bypasses the validating constructor.
            OptionContract::new(
                loaded.spot(),
                loaded.strike(),
                loaded.expiry(),
                loaded.drift(),
                loaded.volatility(),
                loaded.kind(),
            )?
        }
        None => {
            let kind = match kind {
                "call" => OptionKind::Call,
                "put" => OptionKind::Put,
                other => {
                    return Err(CliError::InvalidArgument(format!(
                        "Unknown option kind: {}. Supported: call, put",
                        other
                    )))
                }
            };
            OptionContract::new(spot, strike, expiry, drift, volatility, kind)?
        }
    };

    let config = IntegrationConfig::from_name(rule, step)?;
    info!("Pricing with rule '{}' and step {}", rule, step);

    let price = contract.price(&config);

    println!("z0    = {:.5}", contract.z0());
    println!("price = {:.6}", price);

    Ok(())
}
