//! lds - Command line driver for the low-discrepancy generators
//!
//! # Commands
//!
//! - `lds sphere --bases 2,3,5,7 --count 100` - points on the unit n-sphere
//! - `lds cylinder --bases 2,3,5 --count 100` - points on the cylindrical manifold
//! - `lds halton --bases 2,3 --count 100` - points in the unit hypercube
//! - `lds check` - replay known first-draw values as a build self-test
//!
//! Points are emitted in generation order, either as an aligned table or as
//! a JSON document, so downstream dispersion/discrepancy tooling can
//! consume them directly.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Low-discrepancy point sequences on spheres and cylinders
#[derive(Parser)]
#[command(name = "lds")]
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
    /// Generate points on the unit n-sphere
    Sphere {
        /// Radix bases, one per recursion level, outermost first (needs >= 3)
        #[arg(short, long, value_delimiter = ',', required = true)]
        bases: Vec<u32>,

        /// Number of points to generate
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// Reset the whole generator tree to this counter before drawing
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate points on an n-dimensional cylindrical manifold
    Cylinder {
        /// Radix bases, one per recursion level, outermost first (needs >= 2)
        #[arg(short, long, value_delimiter = ',', required = true)]
        bases: Vec<u32>,

        /// Number of points to generate
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// Reset the whole generator tree to this counter before drawing
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate Halton points in the unit hypercube
    Halton {
        /// Radix bases, one per coordinate
        #[arg(short, long, value_delimiter = ',', required = true)]
        bases: Vec<u32>,

        /// Number of points to generate
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// Reset every coordinate counter to this value before drawing
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check the build by replaying known first-draw values
    Check,
}

fn main() -> anyhow::Result<()> {
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
        Commands::Sphere {
            bases,
            count,
            seed,
            format,
        } => commands::sphere::run(&bases, count, seed, &format),
        Commands::Cylinder {
            bases,
            count,
            seed,
            format,
        } => commands::cylinder::run(&bases, count, seed, &format),
        Commands::Halton {
            bases,
            count,
            seed,
            format,
        } => commands::halton::run(&bases, count, seed, &format),
        Commands::Check => commands::check::run(),
    }
}
