//! Error types emitted by the fleetroute CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

use fleetroute_core::SolveError;
use fleetroute_osrm::OracleBuildError;

/// Errors emitted by the fleetroute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Opening the solve request file failed.
    #[error("failed to open solve request at {path:?}: {source}")]
    OpenRequest {
        /// Path the caller supplied.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Solve request JSON could not be decoded.
    #[error("failed to parse solve request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Path the caller supplied.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the distance oracle failed.
    #[error("failed to build distance oracle for {base_url:?}: {source}")]
    BuildOracle {
        /// OSRM base URL in use.
        base_url: String,
        /// Underlying construction error.
        #[source]
        source: OracleBuildError,
    },
    /// The solver rejected the request.
    #[error("solver failed: {source}")]
    Solve {
        /// Underlying solver error.
        #[source]
        source: SolveError,
    },
    /// Serialising the plan failed.
    #[error("failed to serialize plan: {0}")]
    SerializePlan(#[source] serde_json::Error),
    /// Writing the plan failed.
    #[error("failed to write plan: {0}")]
    WriteOutput(#[source] std::io::Error),
}
