//! Point-to-point travel distances from an external routing oracle.
//!
//! The [`DistanceOracle`] trait abstracts a black-box routing service that
//! prices a pair of geographic points in meters. Implementations absorb
//! their own failures: a pair the service could not price resolves to the
//! [`UNREACHABLE_METERS`] sentinel instead of an error, so the greedy solver
//! routes around outages rather than aborting the whole invocation.

use geo::Coord;

/// Travel distance in meters.
pub type Meters = f64;

/// Sentinel distance for pairs the oracle could not price.
///
/// Chosen large enough that a sentinel never wins a minimum-distance
/// comparison against any real route, yet still totally ordered so a solve
/// under full oracle outage terminates with deterministic tie-breaks.
pub const UNREACHABLE_METERS: Meters = 999_999_999.0;

/// Whether a distance is the unreachable sentinel.
///
/// # Examples
/// ```
/// use fleetroute_core::{UNREACHABLE_METERS, is_unreachable};
///
/// assert!(is_unreachable(UNREACHABLE_METERS));
/// assert!(!is_unreachable(1500.0));
/// ```
#[must_use]
pub fn is_unreachable(distance: Meters) -> bool {
    distance >= UNREACHABLE_METERS
}

/// Price point pairs against an external routing service.
///
/// Implementations never fail: unreachable or unpriceable pairs resolve to
/// [`UNREACHABLE_METERS`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fleetroute_core::{DistanceOracle, Meters};
///
/// struct UnitOracle;
///
/// impl DistanceOracle for UnitOracle {
///     fn distance(&self, _from: Coord<f64>, _to: Coord<f64>) -> Meters {
///         1.0
///     }
/// }
///
/// let pairs = [(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 })];
/// assert_eq!(UnitOracle.distances(&pairs), vec![1.0]);
/// ```
pub trait DistanceOracle: Send + Sync {
    /// Travel distance from `from` to `to` in meters.
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Meters;

    /// Price a batch of pairs, one result per input pair in input order.
    ///
    /// The default evaluates sequentially. Implementations backed by a
    /// network service may fan the batch out concurrently, but must keep
    /// the positional correspondence between `pairs` and the returned
    /// vector: the solver selects minima over complete rounds, and its
    /// tie-breaking relies on stable result positions.
    fn distances(&self, pairs: &[(Coord<f64>, Coord<f64>)]) -> Vec<Meters> {
        pairs.iter().map(|&(from, to)| self.distance(from, to)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::PlanarOracle;
    use rstest::rstest;

    #[rstest]
    fn batch_preserves_input_order() {
        let oracle = PlanarOracle;
        let near = (Coord { x: 0.0, y: 0.0 }, Coord { x: 0.001, y: 0.0 });
        let far = (Coord { x: 0.0, y: 0.0 }, Coord { x: 0.5, y: 0.0 });
        let distances = oracle.distances(&[far, near]);
        assert_eq!(distances.len(), 2);
        assert!(distances[0] > distances[1]);
    }

    #[rstest]
    fn sentinel_is_unreachable() {
        assert!(is_unreachable(UNREACHABLE_METERS));
        assert!(is_unreachable(UNREACHABLE_METERS + 1.0));
        assert!(!is_unreachable(0.0));
    }
}
