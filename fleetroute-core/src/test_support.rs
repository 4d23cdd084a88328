//! Test-only oracle implementations used by unit and behaviour tests.

use geo::Coord;

use crate::{DistanceOracle, Meters, UNREACHABLE_METERS};

/// Deterministic oracle pricing pairs by planar distance.
///
/// Degrees are scaled by an approximate meters-per-degree factor. Good
/// enough for tests that only compare relative distances.
#[derive(Default, Debug, Copy, Clone)]
pub struct PlanarOracle;

/// Approximate meters per degree at the equator.
const METERS_PER_DEGREE: f64 = 111_000.0;

impl DistanceOracle for PlanarOracle {
    #[expect(
        clippy::float_arithmetic,
        reason = "planar distance is inherently floating point"
    )]
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Meters {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        (dx * dx + dy * dy).sqrt() * METERS_PER_DEGREE
    }
}

/// Oracle simulating a full outage: every pair is the sentinel.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnreachableOracle;

impl DistanceOracle for UnreachableOracle {
    fn distance(&self, _from: Coord<f64>, _to: Coord<f64>) -> Meters {
        UNREACHABLE_METERS
    }
}

/// Oracle answering from a fixed table of point pairs.
///
/// Pairs are matched by exact coordinate equality; unmatched pairs resolve
/// to the fallback distance (the sentinel unless overridden).
#[derive(Debug, Clone)]
pub struct ScriptedOracle {
    entries: Vec<(Coord<f64>, Coord<f64>, Meters)>,
    fallback: Meters,
}

impl ScriptedOracle {
    /// Build an oracle from `(from, to, meters)` entries.
    #[must_use]
    pub fn with_entries(entries: Vec<(Coord<f64>, Coord<f64>, Meters)>) -> Self {
        Self {
            entries,
            fallback: UNREACHABLE_METERS,
        }
    }

    /// Set the distance returned for pairs missing from the table.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: Meters) -> Self {
        self.fallback = fallback;
        self
    }
}

impl DistanceOracle for ScriptedOracle {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> Meters {
        self.entries
            .iter()
            .find(|(entry_from, entry_to, _)| *entry_from == from && *entry_to == to)
            .map_or(self.fallback, |&(_, _, meters)| meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn planar_oracle_is_zero_on_identical_points() {
        let point = Coord { x: 1.0, y: 2.0 };
        assert_eq!(PlanarOracle.distance(point, point), 0.0);
    }

    #[rstest]
    fn scripted_oracle_falls_back_to_sentinel() {
        let oracle = ScriptedOracle::with_entries(Vec::new());
        let from = Coord { x: 0.0, y: 0.0 };
        let to = Coord { x: 1.0, y: 1.0 };
        assert_eq!(oracle.distance(from, to), UNREACHABLE_METERS);
    }

    #[rstest]
    fn scripted_oracle_answers_from_table() {
        let from = Coord { x: 0.0, y: 0.0 };
        let to = Coord { x: 1.0, y: 1.0 };
        let oracle = ScriptedOracle::with_entries(vec![(from, to, 42.0)]);
        assert_eq!(oracle.distance(from, to), 42.0);
    }
}
