//! Facade crate for the fleetroute delivery-routing engine.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! solver and the OSRM distance oracle behind feature flags.

#![forbid(unsafe_code)]

pub use fleetroute_core::{
    DEFAULT_DEPOT, Diagnostics, DistanceOracle, FleetPlan, FleetSolver, Meters, Order,
    SolveError, SolveRequest, UNREACHABLE_METERS, Vehicle, VehicleRoute, is_unreachable,
};

#[cfg(feature = "solver-greedy")]
pub use fleetroute_solver::GreedySolver;

#[cfg(feature = "oracle-osrm")]
pub use fleetroute_osrm::{HttpDistanceOracle, HttpDistanceOracleConfig, OracleBuildError};
