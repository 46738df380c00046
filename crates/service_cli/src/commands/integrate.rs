//! Integrate command implementation
//!
//! Compares every rule in the registry on the reference integral
//! ∫_{-1}^{4} sin(t²) dt ≈ 1.057402146, once with a fixed subdivision count
//! and once with a target step size.

use quad_core::quadrature::{integrate, integrate_by_step, RuleKind};
use tracing::info;

use crate::Result;

/// Reference value of ∫_{-1}^{4} sin(t²) dt.
const REFERENCE: f64 = 1.057402146;

/// Run the integrate command
pub fn run(subdivisions: u32, step: f64) -> Result<()> {
    info!("Comparing quadrature rules on sin(t²) over [-1, 4]");
    info!("  Subdivisions: {}", subdivisions);
    info!("  Step size: {}", step);

    let f = |t: f64| (t * t).sin();

    println!("\nintegrate (N = {})", subdivisions);
    println!("{:<10} {:>16} {:>14}", "rule", "estimate", "error");
    for kind in RuleKind::ALL {
        let rule = kind.rule();
        let estimate = integrate(f, -1.0, 4.0, subdivisions, &rule)?;
        println!(
            "{:<10} {:>16.10} {:>14.10}",
            kind.name(),
            estimate,
            (estimate - REFERENCE).abs()
        );
    }

    println!("\nintegrate_by_step (dx = {})", step);
    println!("{:<10} {:>16} {:>14}", "rule", "estimate", "error");
    for kind in RuleKind::ALL {
        let rule = kind.rule();
        let estimate = integrate_by_step(f, -1.0, 4.0, step, &rule)?;
        println!(
            "{:<10} {:>16.10} {:>14.10}",
            kind.name(),
            estimate,
            (estimate - REFERENCE).abs()
        );
    }

    Ok(())
}
