//! Battle balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze battle balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 battles
//!   cargo run --bin simulate -- -n 100          # 100 battles
//!   cargo run --bin simulate -- --seed 42       # Reproducible run
//!   cargo run --bin simulate -- --json out.json # Also save a JSON report

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use duel::simulator::{run_simulation, SimConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Monte Carlo balance simulator for hero vs. villain battles")]
struct Args {
    /// Number of battles to simulate
    #[arg(short = 'n', long, default_value = "1000")]
    runs: u32,

    /// Base random seed; battle i uses seed + i (wrapping)
    #[arg(long)]
    seed: Option<u64>,

    /// Drive every battle with zero randomness
    #[arg(long, conflicts_with = "seed")]
    fixed_zero: bool,

    /// Write the JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log every battle to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        fixed_zero: args.fixed_zero,
        verbosity: if args.verbose { 2 } else { 1 },
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              DUEL BALANCE SIMULATOR                           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Battles:        {}", config.num_runs);
    println!("  Fixed Zero:     {}", config.fixed_zero);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if let Some(path) = args.json {
        std::fs::write(&path, report.to_json())
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
        println!("JSON report saved to: {}", path.display());
    }
    Ok(())
}
