//! Solve command implementation for the fleetroute CLI.

use std::fs::File;
use std::io::{BufReader, Write};
use std::time::Duration;

use camino::Utf8Path;
use serde::Serialize;

use fleetroute_core::{FleetSolver, Order, SolveRequest};
use fleetroute_osrm::{HttpDistanceOracle, HttpDistanceOracleConfig};
use fleetroute_solver::GreedySolver;

use crate::{Cli, CliError};

/// Envelope for the single-vehicle fallback output, matching the shape the
/// request layer expects for flat routes.
#[derive(Debug, Serialize)]
struct SingleRoutePlan {
    route: Vec<Order>,
}

pub(crate) fn execute(cli: &Cli) -> Result<(), CliError> {
    let request = load_request(&cli.request_path)?;
    let oracle = build_oracle(cli)?;
    let solver = GreedySolver::new(oracle);

    let rendered = if cli.single {
        let vehicle = request.vehicles.first().cloned().unwrap_or_default();
        let route = solver.solve_single(&request.orders, &vehicle);
        serde_json::to_string_pretty(&SingleRoutePlan { route })
            .map_err(CliError::SerializePlan)?
    } else {
        let plan = solver
            .solve(&request)
            .map_err(|source| CliError::Solve { source })?;
        serde_json::to_string_pretty(&plan).map_err(CliError::SerializePlan)?
    };

    write_output(cli.output.as_deref(), &rendered)
}

pub(crate) fn load_request(path: &Utf8Path) -> Result<SolveRequest, CliError> {
    let file = File::open(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn build_oracle(cli: &Cli) -> Result<HttpDistanceOracle, CliError> {
    let mut config = HttpDistanceOracleConfig::default();
    if let Some(base_url) = &cli.osrm_base_url {
        config.base_url.clone_from(base_url);
    }
    config = config
        .with_timeout(Duration::from_secs(cli.timeout_secs))
        .with_max_in_flight(cli.max_in_flight);
    let base_url = config.base_url.clone();
    HttpDistanceOracle::with_config(config)
        .map_err(|source| CliError::BuildOracle { base_url, source })
}

fn write_output(output: Option<&Utf8Path>, rendered: &str) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, rendered).map_err(CliError::WriteOutput),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(CliError::WriteOutput)
        }
    }
}
