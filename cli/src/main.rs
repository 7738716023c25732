//! randvar - Command Line Sampling of Simulation Random Variates
//!
//! # Commands
//!
//! - `randvar sample <EXPR>` - Print variates drawn from a distribution
//! - `randvar bounds <EXPR>` - Print the support bounds of a distribution
//! - `randvar stats <EXPR>` - Summarise a batch of variates
//! - `randvar config <FILE>` - Sample every variable of a JSON configuration

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Simulation random variate sampler
#[derive(Parser)]
#[command(name = "randvar")]
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
    /// Print variates drawn from a distribution expression
    Sample {
        /// Distribution expression, e.g. "normal(0, 1)"
        expr: String,

        /// Number of variates
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Seed of the generator (default: library default seed)
        #[arg(short, long)]
        seed: Option<i64>,
    },

    /// Print the minimum and maximum of a distribution expression
    Bounds {
        /// Distribution expression
        expr: String,
    },

    /// Print mean, variance and observed range of a batch of variates
    Stats {
        /// Distribution expression
        expr: String,

        /// Number of variates
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,

        /// Seed of the generator (default: library default seed)
        #[arg(short, long)]
        seed: Option<i64>,
    },

    /// Build the variables of a JSON configuration and sample each of them
    Config {
        /// Path to the configuration file
        file: String,

        /// Number of variates per variable
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    debug!("Verbose mode enabled");

    let result = match cli.command {
        Commands::Sample { expr, count, seed } => commands::sample::run(&expr, count, seed),
        Commands::Bounds { expr } => commands::bounds::run(&expr),
        Commands::Stats { expr, count, seed } => commands::stats::run(&expr, count, seed),
        Commands::Config { file, count } => commands::config::run(&file, count),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
