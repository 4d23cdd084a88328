//! Nearest-neighbour sequencing phase.
//!
//! Classic tour construction: from the current anchor, repeatedly visit the
//! closest remaining order and advance the anchor to it.

use geo::Coord;

use fleetroute_core::{DistanceOracle, Order};

use super::{OracleUsage, index_of_min};

/// Order the `assigned` indices into a visiting sequence from `start`.
///
/// Each round prices anchor->order for every remaining index in one batch,
/// then takes the strict minimum (earliest entry on ties, preserving the
/// assignment-phase ordering of `assigned`).
#[expect(
    clippy::indexing_slicing,
    reason = "assigned indices are produced by the assignment phase over the same order slice"
)]
pub(super) fn sequence<O: DistanceOracle>(
    orders: &[Order],
    assigned: &[usize],
    start: Coord<f64>,
    oracle: &O,
    usage: &mut OracleUsage,
) -> Vec<usize> {
    let mut remaining: Vec<usize> = assigned.to_vec();
    let mut route = Vec::with_capacity(remaining.len());
    let mut anchor = start;

    while !remaining.is_empty() {
        let pending: Vec<(Coord<f64>, Coord<f64>)> = remaining
            .iter()
            .map(|&order_idx| (anchor, orders[order_idx].position()))
            .collect();
        let distances = oracle.distances(&pending);
        usage.record(&distances);
        let Some(pick) = index_of_min(&distances) else {
            break;
        };

        let order_idx = remaining.remove(pick);
        anchor = orders[order_idx].position();
        route.push(order_idx);
        log::debug!(
            "sequenced order {} ({:.1} m from previous stop)",
            orders[order_idx].id,
            distances[pick],
        );
    }

    route
}
