//! Command-line harness for the GeoNav routing engine.
//!
//! `geonav optimize <request.json>` loads a POI catalogue and stop
//! selection from JSON, consults the route-ordering oracle, and writes an
//! ordered-route report to stdout. The oracle credential is taken from
//! `GEONAV_API_KEY` unless overridden on the command line; a missing
//! credential is not an error and yields the pass-through ordering.

#![forbid(unsafe_code)]

mod error;
mod optimize;

pub use error::CliError;
pub use optimize::OptimizeArgs;

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(name = "geonav", about = "GeoNav route-ordering console tools")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Order a stop selection into a route via the external oracle.
    Optimize(OptimizeArgs),
}

/// Parse arguments from the process environment and dispatch.
///
/// # Errors
///
/// Returns a [`CliError`] when the request cannot be loaded, the oracle
/// client cannot be built, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Optimize(args) => optimize::run(&args, &mut std::io::stdout().lock()),
    }
}
