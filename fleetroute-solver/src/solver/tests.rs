//! Tests for the `GreedySolver`.

use super::*;
use fleetroute_core::test_support::{PlanarOracle, ScriptedOracle, UnreachableOracle};
use rstest::rstest;

fn stop_ids(route: &VehicleRoute) -> Vec<&str> {
    route.stops.iter().map(|order| order.id.as_str()).collect()
}

#[rstest]
fn index_of_min_prefers_earliest_on_ties() {
    assert_eq!(index_of_min(&[5.0, 1.0, 1.0, 3.0]), Some(1));
    assert_eq!(index_of_min(&[2.0, 2.0]), Some(0));
    assert_eq!(index_of_min(&[]), None);
}

// Scenario A: one unconstrained vehicle, three orders at increasing
// distance from the default depot. The route must walk outward stop by
// stop.
#[rstest]
fn single_vehicle_orders_by_proximity() {
    let orders = vec![
        Order::new("o-2", 40.7128, -73.9860),
        Order::new("o-1", 40.7128, -73.9960),
        Order::new("o-3", 40.7128, -73.9760),
    ];
    let request = SolveRequest {
        orders,
        vehicles: vec![Vehicle::default()],
    };
    let solver = GreedySolver::new(PlanarOracle);

    let plan = solver.solve(&request).expect("one vehicle is enough");

    assert_eq!(plan.routes.len(), 1);
    assert_eq!(stop_ids(&plan.routes[0]), vec!["o-1", "o-2", "o-3"]);
    assert!(plan.unassigned.is_empty());

    // The fallback mode walks the same sequence, flat.
    let flat = solver.solve_single(&request.orders, &Vehicle::default());
    let flat_ids: Vec<&str> = flat.iter().map(|order| order.id.as_str()).collect();
    assert_eq!(flat_ids, vec!["o-1", "o-2", "o-3"]);
}

// Scenario B: a 60 kg order fits only the 100 kg vehicle, even though the
// other orders sit right next to the 50 kg vehicle.
#[rstest]
fn heavy_order_never_lands_on_small_vehicle() {
    let orders = vec![
        Order::new("o-heavy", 40.7005, -74.00).with_weight(60.0),
        Order::new("o-30", 40.801, -74.10).with_weight(30.0),
        Order::new("o-40", 40.802, -74.10).with_weight(40.0),
    ];
    let vehicles = vec![
        Vehicle::with_capacity("v100", 100.0).with_start(40.70, -74.00),
        Vehicle::with_capacity("v50", 50.0).with_start(40.80, -74.10),
    ];
    let request = SolveRequest { orders, vehicles };

    let plan = GreedySolver::new(PlanarOracle)
        .solve(&request)
        .expect("fleet is non-empty");

    assert!(plan.unassigned.is_empty());
    let v100 = &plan.routes[0];
    let v50 = &plan.routes[1];
    assert_eq!(v100.vehicle_id.as_deref(), Some("v100"));
    assert!(stop_ids(v100).contains(&"o-heavy"));
    assert_eq!(stop_ids(v50), vec!["o-30"]);
}

// Scenario C: an order heavier than the whole fleet is reported as
// unassigned, never silently dropped.
#[rstest]
fn infeasible_order_is_reported_unassigned() {
    let orders = vec![
        Order::new("o-1", 40.71, -74.00).with_weight(10.0),
        Order::new("o-too-heavy", 40.72, -74.00).with_weight(60.0),
        Order::new("o-2", 40.73, -74.00).with_weight(20.0),
    ];
    let request = SolveRequest {
        orders,
        vehicles: vec![Vehicle::with_capacity("v-1", 50.0)],
    };

    let plan = GreedySolver::new(PlanarOracle)
        .solve(&request)
        .expect("fleet is non-empty");

    let routed: usize = plan.routes.iter().map(|route| route.stops.len()).sum();
    assert_eq!(routed, request.orders.len() - 1);
    let unassigned_ids: Vec<&str> = plan
        .unassigned
        .iter()
        .map(|order| order.id.as_str())
        .collect();
    assert_eq!(unassigned_ids, vec!["o-too-heavy"]);
}

// Scenario D: a dead oracle prices every pair at the sentinel. The solve
// still terminates, ties break by input order, and the failure counters
// expose the outage.
#[rstest]
fn full_oracle_outage_still_produces_a_plan() {
    let orders = vec![
        Order::new("o-1", 40.71, -74.00),
        Order::new("o-2", 40.72, -74.00),
        Order::new("o-3", 40.73, -74.00),
    ];
    let vehicles = vec![
        Vehicle::with_capacity("v-1", f64::INFINITY),
        Vehicle::with_capacity("v-2", f64::INFINITY),
    ];
    let request = SolveRequest { orders, vehicles };

    let plan = GreedySolver::new(UnreachableOracle)
        .solve(&request)
        .expect("fleet is non-empty");

    // Every round ties at the sentinel, so the first vehicle takes every
    // order in input order and the second is omitted.
    assert_eq!(plan.routes.len(), 1);
    assert_eq!(plan.routes[0].vehicle_id.as_deref(), Some("v-1"));
    assert_eq!(stop_ids(&plan.routes[0]), vec!["o-1", "o-2", "o-3"]);

    // Assignment rounds: 3x2 + 2x2 + 1x2; sequencing rounds: 3 + 2 + 1.
    assert_eq!(plan.diagnostics.oracle_queries, 18);
    assert_eq!(plan.diagnostics.oracle_failures, 18);
    assert_eq!(plan.diagnostics.failure_rate(), 1.0);
}

#[rstest]
fn equidistant_vehicles_tie_break_by_input_order() {
    let order = Order::new("o-1", 40.75, -74.00);
    let first = Vehicle::with_capacity("v-first", 10.0).with_start(40.70, -74.00);
    let second = Vehicle::with_capacity("v-second", 10.0).with_start(40.80, -74.00);
    let oracle = ScriptedOracle::with_entries(vec![
        (first.start_position(), order.position(), 100.0),
        (second.start_position(), order.position(), 100.0),
    ])
    .with_fallback(100.0);
    let request = SolveRequest {
        orders: vec![order],
        vehicles: vec![first, second],
    };

    let plan = GreedySolver::new(oracle)
        .solve(&request)
        .expect("fleet is non-empty");

    assert_eq!(plan.routes.len(), 1);
    assert_eq!(plan.routes[0].vehicle_id.as_deref(), Some("v-first"));
}

#[rstest]
fn weightless_orders_fit_a_full_vehicle() {
    let request = SolveRequest {
        orders: vec![Order::new("o-1", 40.71, -74.00)],
        vehicles: vec![Vehicle::with_capacity("v-1", 0.0)],
    };

    let plan = GreedySolver::new(PlanarOracle)
        .solve(&request)
        .expect("fleet is non-empty");

    assert_eq!(plan.routes.len(), 1);
    assert!(plan.unassigned.is_empty());
}

#[rstest]
fn empty_fleet_is_rejected() {
    let request = SolveRequest {
        orders: vec![Order::new("o-1", 40.71, -74.00)],
        vehicles: Vec::new(),
    };

    let err = GreedySolver::new(PlanarOracle)
        .solve(&request)
        .expect_err("no vehicles");
    assert_eq!(err, SolveError::NoVehicles);
}

#[rstest]
fn empty_order_list_yields_empty_plan() {
    let request = SolveRequest {
        orders: Vec::new(),
        vehicles: vec![Vehicle::default()],
    };

    let plan = GreedySolver::new(PlanarOracle)
        .solve(&request)
        .expect("fleet is non-empty");

    assert!(plan.routes.is_empty());
    assert!(plan.unassigned.is_empty());
    assert_eq!(plan.diagnostics.oracle_queries, 0);
}

#[rstest]
fn repeated_solves_are_bit_identical() {
    let request = SolveRequest {
        orders: vec![
            Order::new("o-1", 40.71, -74.01).with_weight(5.0),
            Order::new("o-2", 40.74, -73.98).with_weight(25.0),
            Order::new("o-3", 40.69, -74.03).with_weight(15.0),
            Order::new("o-4", 40.76, -73.96),
        ],
        vehicles: vec![
            Vehicle::with_capacity("v-1", 30.0).with_start(40.70, -74.00),
            Vehicle::with_capacity("v-2", 40.0).with_start(40.75, -73.97),
        ],
    };
    let solver = GreedySolver::new(PlanarOracle);

    let first = solver.solve(&request).expect("fleet is non-empty");
    let second = solver.solve(&request).expect("fleet is non-empty");

    assert_eq!(first.routes, second.routes);
    assert_eq!(first.unassigned, second.unassigned);
    assert_eq!(
        first.diagnostics.oracle_queries,
        second.diagnostics.oracle_queries
    );
}

#[rstest]
fn single_mode_uses_default_depot_without_start() {
    let orders = vec![
        Order::new("far", 40.7128, -73.90),
        Order::new("near", 40.7128, -74.00),
    ];

    let flat = GreedySolver::new(PlanarOracle).solve_single(&orders, &Vehicle::default());

    let ids: Vec<&str> = flat.iter().map(|order| order.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "far"]);
}
