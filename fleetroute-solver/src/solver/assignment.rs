//! Capacity-aware assignment phase.
//!
//! Global greedy: every round prices all feasible (order, vehicle) pairs
//! from each vehicle's fixed start position and assigns the single closest
//! pair. Anchors never advance here; only the sequencing phase moves them.

use geo::Coord;

use fleetroute_core::{DistanceOracle, Order, Vehicle};

use super::{OracleUsage, index_of_min};

/// Per-vehicle working state for one solve invocation.
pub(super) struct VehicleState {
    /// Anchor for distance queries; fixed at the vehicle start position
    /// throughout assignment.
    pub(super) start: Coord<f64>,
    /// Capacity left in kilograms; infinite for unconstrained vehicles.
    pub(super) remaining: f64,
    /// Indices into the request order list, in assignment order.
    pub(super) assigned: Vec<usize>,
}

impl VehicleState {
    fn new(vehicle: &Vehicle) -> Self {
        Self {
            start: vehicle.start_position(),
            remaining: vehicle.capacity(),
            assigned: Vec::new(),
        }
    }
}

/// Assign orders to vehicles until no feasible pair remains.
///
/// Returns the per-vehicle state and the indices of orders no vehicle could
/// take, both referring to positions in `orders`. Candidate pairs are
/// enumerated orders-outer, vehicles-inner in input order; together with
/// the first-wins minimum this makes tie-breaks deterministic.
#[expect(
    clippy::indexing_slicing,
    clippy::float_arithmetic,
    reason = "indices are produced by the enumerations below; capacity bookkeeping is floating point by contract"
)]
pub(super) fn assign<O: DistanceOracle>(
    orders: &[Order],
    vehicles: &[Vehicle],
    oracle: &O,
    usage: &mut OracleUsage,
) -> (Vec<VehicleState>, Vec<usize>) {
    let mut states: Vec<VehicleState> = vehicles.iter().map(VehicleState::new).collect();
    let mut unassigned: Vec<usize> = (0..orders.len()).collect();

    loop {
        // (slot in `unassigned`, vehicle index) for every feasible pair,
        // with the matching anchor->order query at the same position.
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        let mut pending: Vec<(Coord<f64>, Coord<f64>)> = Vec::new();
        for (slot, &order_idx) in unassigned.iter().enumerate() {
            let weight = orders[order_idx].weight();
            let position = orders[order_idx].position();
            for (vehicle_idx, state) in states.iter().enumerate() {
                if state.remaining >= weight {
                    candidates.push((slot, vehicle_idx));
                    pending.push((state.start, position));
                }
            }
        }
        if candidates.is_empty() {
            break;
        }

        // Fan-out/fan-in: the whole round is priced before selection.
        let distances = oracle.distances(&pending);
        usage.record(&distances);
        let Some(pick) = index_of_min(&distances) else {
            break;
        };

        let (slot, vehicle_idx) = candidates[pick];
        let order_idx = unassigned.remove(slot);
        let state = &mut states[vehicle_idx];
        state.remaining -= orders[order_idx].weight();
        state.assigned.push(order_idx);
        log::debug!(
            "assigned order {} to vehicle #{vehicle_idx} ({:.1} m, {:.1} kg left)",
            orders[order_idx].id,
            distances[pick],
            state.remaining,
        );
    }

    (states, unassigned)
}
