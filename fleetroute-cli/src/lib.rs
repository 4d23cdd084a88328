//! Command-line interface for the fleetroute engine.
//!
//! The binary plays the request layer: it decodes a JSON solve request,
//! builds the OSRM-backed distance oracle, runs the greedy solver and
//! emits the plan as JSON.

#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use clap::Parser;

mod error;
mod solve;

pub use error::CliError;

/// Default OSRM request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Default bound on concurrently in-flight OSRM queries.
const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fleetroute",
    about = "Assign delivery orders to vehicles and sequence each route",
    long_about = "Solve a delivery routing request by querying an OSRM \
                 instance for point-to-point driving distances. The request \
                 is a JSON document with an `orders` array and a `vehicles` \
                 array; the plan is written as JSON to stdout or to a file."
)]
pub struct Cli {
    /// Path to a JSON file containing the solve request.
    #[arg(value_name = "path")]
    pub request_path: Utf8PathBuf,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long, value_name = "url")]
    pub osrm_base_url: Option<String>,
    /// Per-query timeout in seconds.
    #[arg(long, value_name = "secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
    /// Bound on concurrently in-flight OSRM queries.
    #[arg(long, value_name = "n", default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    pub max_in_flight: usize,
    /// Sequence all orders onto the first vehicle, skipping assignment.
    #[arg(long)]
    pub single: bool,
    /// Write the plan to this path instead of stdout.
    #[arg(long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
}

/// Parse arguments from the environment and execute the solve.
///
/// # Errors
///
/// Returns a [`CliError`] when the request cannot be loaded, the oracle
/// cannot be built, the solver rejects the request, or the plan cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    solve::execute(&cli)
}
