//! `GreedySolver`: capacity-aware assignment followed by nearest-neighbour
//! sequencing.

use std::time::Instant;

use fleetroute_core::{
    Diagnostics, DistanceOracle, FleetPlan, FleetSolver, Meters, Order, SolveError, SolveRequest,
    Vehicle, VehicleRoute, is_unreachable,
};

mod assignment;
mod sequencing;

/// Oracle call counters accumulated across the rounds of one invocation.
///
/// Failures are sentinel distances observed in round results; the solver
/// cannot tell an outage from a genuinely unroutable pair, but the ratio
/// lets operators make that call.
#[derive(Debug, Default, Clone, Copy)]
struct OracleUsage {
    queries: u64,
    failures: u64,
}

impl OracleUsage {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "round sizes are bounded by orders x vehicles, far below u64::MAX"
    )]
    fn record(&mut self, distances: &[Meters]) {
        self.queries += distances.len() as u64;
        self.failures += distances.iter().copied().filter(|&d| is_unreachable(d)).count() as u64;
    }
}

/// Index of the strictly smallest distance; the earliest entry wins ties.
///
/// Candidate vectors are built in a fixed iteration order, so "earliest
/// entry" gives reproducible tie-breaks even when every distance is the
/// sentinel.
fn index_of_min(distances: &[Meters]) -> Option<usize> {
    let mut best: Option<(usize, Meters)> = None;
    for (idx, &distance) in distances.iter().enumerate() {
        match best {
            Some((_, incumbent)) if distance >= incumbent => {}
            _ => best = Some((idx, distance)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Two-phase greedy fleet solver over a [`DistanceOracle`].
///
/// # Examples
/// ```
/// use fleetroute_core::{FleetSolver, Order, SolveRequest, Vehicle};
/// use fleetroute_core::test_support::PlanarOracle;
/// use fleetroute_solver::GreedySolver;
///
/// let solver = GreedySolver::new(PlanarOracle);
/// let request = SolveRequest {
///     orders: vec![Order::new("o-1", 40.72, -74.00)],
///     vehicles: vec![Vehicle::default()],
/// };
/// let plan = solver.solve(&request).expect("one vehicle is enough");
/// assert_eq!(plan.routes.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver<O: DistanceOracle> {
    oracle: O,
}

impl<O: DistanceOracle> GreedySolver<O> {
    /// Construct a solver over the given oracle.
    pub const fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Single-vehicle fallback: sequence the full order list directly.
    ///
    /// Skips the assignment phase entirely: every order is implicitly
    /// assigned to `vehicle` with no capacity check. Runs the same
    /// nearest-neighbour construction as the multi-vehicle sequencing
    /// phase, anchored at the vehicle's start position. Returns a flat
    /// visiting sequence rather than a per-vehicle plan.
    #[must_use]
    pub fn solve_single(&self, orders: &[Order], vehicle: &Vehicle) -> Vec<Order> {
        let mut usage = OracleUsage::default();
        let all: Vec<usize> = (0..orders.len()).collect();
        let sequenced =
            sequencing::sequence(orders, &all, vehicle.start_position(), &self.oracle, &mut usage);
        collect_orders(orders, &sequenced)
    }
}

impl<O: DistanceOracle> FleetSolver for GreedySolver<O> {
    fn solve(&self, request: &SolveRequest) -> Result<FleetPlan, SolveError> {
        if request.vehicles.is_empty() {
            return Err(SolveError::NoVehicles);
        }
        let started_at = Instant::now();
        let mut usage = OracleUsage::default();

        let (states, unassigned) =
            assignment::assign(&request.orders, &request.vehicles, &self.oracle, &mut usage);

        let mut routes = Vec::new();
        for (vehicle, state) in request.vehicles.iter().zip(&states) {
            if state.assigned.is_empty() {
                continue;
            }
            let sequenced = sequencing::sequence(
                &request.orders,
                &state.assigned,
                state.start,
                &self.oracle,
                &mut usage,
            );
            routes.push(VehicleRoute {
                vehicle_id: vehicle.id.clone(),
                stops: collect_orders(&request.orders, &sequenced),
            });
        }

        Ok(FleetPlan {
            routes,
            unassigned: collect_orders(&request.orders, &unassigned),
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                oracle_queries: usage.queries,
                oracle_failures: usage.failures,
            },
        })
    }
}

fn collect_orders(orders: &[Order], indices: &[usize]) -> Vec<Order> {
    indices
        .iter()
        .filter_map(|&idx| orders.get(idx).cloned())
        .collect()
}

#[cfg(test)]
mod tests;
