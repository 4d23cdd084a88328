//! Core domain types for the fleetroute engine.
//!
//! These models mirror the wire format of the request layer and provide the
//! trait seams between the greedy solver and its external collaborators.
//! Constructors and accessors resolve the optional wire fields (missing
//! capacities, absent start positions) so downstream code never re-implements
//! the defaulting rules.

#![forbid(unsafe_code)]

mod distance;
mod order;
mod solver;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{DistanceOracle, Meters, UNREACHABLE_METERS, is_unreachable};
pub use order::Order;
pub use solver::{Diagnostics, FleetPlan, FleetSolver, SolveError, SolveRequest, VehicleRoute};
pub use vehicle::{DEFAULT_DEPOT, Vehicle};
