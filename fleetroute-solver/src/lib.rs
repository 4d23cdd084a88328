//! Greedy assignment-and-sequencing solver for delivery fleets.
//!
//! The solver runs in two decoupled phases. The assignment phase greedily
//! hands each order to the feasible vehicle with the globally smallest
//! oracle distance from that vehicle's start position. The sequencing phase
//! then orders each vehicle's stops by nearest-neighbour tour construction.
//! Neither phase seeks global optimality; both are deterministic given
//! identical input and oracle responses.

#![forbid(unsafe_code)]

mod solver;

pub use solver::GreedySolver;
