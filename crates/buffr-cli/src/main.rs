//! # buffr CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use buffr_cli::afford::{run_afford, AffordArgs};
use buffr_cli::policy::{run_policy, PolicyArgs};
use buffr_cli::quote::{run_quote, QuoteArgs};
use buffr_cli::validate::{run_validate, ValidateArgs};
use buffr_cli::EXIT_OPERATIONAL;

/// BuffrLend loan calculator
///
/// Prices short-term salary loans, checks affordability, and validates
/// borrower input against the current lending policy.
#[derive(Parser, Debug)]
#[command(name = "buffr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a loan and optionally lay out its repayment schedule.
    Quote(QuoteArgs),

    /// Check a loan against the salary 1/3 rule.
    Afford(AffordArgs),

    /// Validate a loan amount and/or term.
    Validate(ValidateArgs),

    /// Show the current pricing policy.
    Policy(PolicyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Quote(args) => run_quote(&args, &mut out),
        Commands::Afford(args) => run_afford(&args, &mut out),
        Commands::Validate(args) => run_validate(&args, &mut out),
        Commands::Policy(args) => run_policy(&args, &mut out),
    };

    match result.and_then(|code| out.flush().map(|()| code).map_err(Into::into)) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}
