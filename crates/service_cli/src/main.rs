//! Quadrisk CLI - Command Line Operations for the Quadrature Engine
//!
//! # Commands
//!
//! - `quadrisk integrate` - Compare every quadrature rule on a reference integral
//! - `quadrisk price` - Price a European option through the integration-backed CDF
//! - `quadrisk claims` - Tabulate a client's claim distributions (nested integration)
//!
//! Failures (unknown rule, invalid parameters, unreadable files) propagate
//! out of `main` as a non-zero exit code.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Quadrisk quadrature and claim-distribution CLI
#[derive(Parser)]
#[command(name = "quadrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every rule on the reference integral of sin(t²) over [-1, 4]
    Integrate {
        /// Fixed subdivision count for the count-driven pass
        #[arg(short = 'n', long, default_value = "1000000")]
        subdivisions: u32,

        /// Target step size for the step-driven pass
        #[arg(short, long, default_value = "0.00001")]
        step: f64,
    },

    /// Price a European option
    Price {
        /// Path to a JSON contract file (overrides the individual flags)
        #[arg(short = 'f', long)]
        contract: Option<String>,

        /// Spot price
        #[arg(long, default_value = "100.0")]
        spot: f64,

        /// Strike price
        #[arg(long, default_value = "100.0")]
        strike: f64,

        /// Time to maturity in years
        #[arg(long, default_value = "1.0")]
        expiry: f64,

        /// Drift of the underlying
        #[arg(long, default_value = "0.0")]
        drift: f64,

        /// Volatility
        #[arg(long, default_value = "0.2")]
        volatility: f64,

        /// Option side (call or put)
        #[arg(long, default_value = "call")]
        kind: String,

        /// Quadrature rule name
        #[arg(short, long, default_value = "gauss3")]
        rule: String,

        /// Target step size for the CDF integrations
        #[arg(short, long, default_value = "0.01")]
        step: f64,
    },

    /// Tabulate claim distributions for an insured client
    Claims {
        /// Path to a JSON client file (overrides the individual flags)
        #[arg(short = 'f', long)]
        client: Option<String>,

        /// Log-normal location parameter
        #[arg(long, default_value = "7.0")]
        location: f64,

        /// Log-normal scale parameter
        #[arg(long, default_value = "1.5")]
        scale: f64,

        /// Probability of zero claims
        #[arg(long, default_value = "0.5")]
        p0: f64,

        /// Probability of one claim
        #[arg(long, default_value = "0.3")]
        p1: f64,

        /// Probability of two claims
        #[arg(long, default_value = "0.2")]
        p2: f64,

        /// Lower end of the tabulated range
        #[arg(long, default_value = "100.0")]
        from: f64,

        /// Upper end of the tabulated range
        #[arg(long, default_value = "4000.0")]
        to: f64,

        /// Number of tabulated points
        #[arg(long, default_value = "16")]
        points: usize,

        /// Quadrature rule name
        #[arg(short, long, default_value = "simpson")]
        rule: String,

        /// Target step size (bounds the O(N²) nested integration cost)
        #[arg(short, long, default_value = "10.0")]
        step: f64,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Integrate { subdivisions, step } => commands::integrate::run(subdivisions, step),
        Commands::Price {
            contract,
            spot,
            strike,
            expiry,
            drift,
            volatility,
            kind,
            rule,
            step,
        } => commands::price::run(
            contract.as_deref(),
            spot,
            strike,
            expiry,
            drift,
            volatility,
            &kind,
            &rule,
            step,
        ),
        Commands::Claims {
            client,
            location,
            scale,
            p0,
            p1,
            p2,
            from,
            to,
            points,
            rule,
            step,
        } => commands::claims::run(
            client.as_deref(),
            location,
            scale,
            [p0, p1, p2],
            from,
            to,
            points,
            &rule,
            step,
        ),
    }
}
