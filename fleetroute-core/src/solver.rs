//! Solver trait and the request/response types it exchanges.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Order, Vehicle};

/// One solve invocation's input: the full order and vehicle lists.
///
/// # Examples
/// ```
/// use fleetroute_core::SolveRequest;
///
/// let request: SolveRequest =
///     serde_json::from_str(r#"{"orders":[],"vehicles":[]}"#).expect("valid request");
/// assert!(request.orders.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Orders to assign and sequence.
    pub orders: Vec<Order>,
    /// Fleet available for this invocation, in caller-significant order.
    pub vehicles: Vec<Vehicle>,
}

/// Ordered stop list for one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRoute {
    /// Identifier of the vehicle, if the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    /// Orders in visiting sequence.
    pub stops: Vec<Order>,
}

/// Counters describing one solve invocation.
///
/// `oracle_failures` counts sentinel distances observed across all rounds,
/// letting operators distinguish "oracle is down" from "no feasible route".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Wall-clock time spent in the solver.
    pub solve_time: Duration,
    /// Distance queries issued against the oracle.
    pub oracle_queries: u64,
    /// Queries that resolved to the unreachable sentinel.
    pub oracle_failures: u64,
}

impl Diagnostics {
    /// Fraction of oracle queries that resolved to the sentinel.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "operator-facing ratio; query counts stay far below 2^52"
    )]
    pub fn failure_rate(&self) -> f64 {
        if self.oracle_queries == 0 {
            0.0
        } else {
            self.oracle_failures as f64 / self.oracle_queries as f64
        }
    }
}

/// Result of a multi-vehicle solve.
///
/// Routes appear in vehicle input order and only for vehicles with at least
/// one stop. Orders too heavy for every vehicle are reported in
/// `unassigned` rather than silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetPlan {
    /// Per-vehicle visiting sequences.
    pub routes: Vec<VehicleRoute>,
    /// Orders no vehicle could take, in request order.
    pub unassigned: Vec<Order>,
    /// Invocation counters.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`FleetSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The request contained no vehicles.
    #[error("at least one vehicle is required")]
    NoVehicles,
}

/// Assign orders to vehicles and sequence each vehicle's stops.
///
/// Implementations must be deterministic: identical requests and identical
/// oracle responses produce identical plans, including tie-break outcomes.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait FleetSolver: Send + Sync {
    /// Solve a request, producing a plan or an error.
    fn solve(&self, request: &SolveRequest) -> Result<FleetPlan, SolveError>;
}
