//! HTTP distance oracle backed by OSRM's Route service.
//!
//! [`HttpDistanceOracle`] implements the
//! [`DistanceOracle`](fleetroute_core::DistanceOracle) trait by querying an
//! OSRM instance for point-to-point driving distances. Failures are absorbed
//! into the unreachable sentinel so the solver never aborts on an oracle
//! outage.

#![forbid(unsafe_code)]

mod client;
mod osrm;

pub use client::{
    DEFAULT_USER_AGENT, HttpDistanceOracle, HttpDistanceOracleConfig, OracleBuildError,
    OracleStats,
};
