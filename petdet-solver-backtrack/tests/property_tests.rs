//! Property-based tests for the backtracking solver.
//!
//! # Invariants tested
//!
//! - **Route validity:** every route found passes an independent replay
//!   through `audit_route` with the same budget and capacity.
//! - **Determinism:** solving the same graph twice yields the same outcome.
//! - **Budget monotonicity:** a puzzle solvable within a budget stays
//!   solvable when the budget grows.

use petdet_core::{Distance, GraphBuilder, PuzzleGraph, Solver, audit_route};
use petdet_solver_backtrack::{BacktrackingConfig, BacktrackingSolver, DEFAULT_CAPACITY};
use proptest::prelude::*;

/// Node names drawn on by the generated puzzles.
const NAMES: [&str; 7] = ["car", "p0", "p1", "p2", "p0_home", "p1_home", "p2_home"];

type Edge = (usize, usize, Distance);

/// Random edge lists over [`NAMES`], always touching the vehicle.
fn edges_strategy() -> impl Strategy<Value = Vec<Edge>> {
    let first = (1..NAMES.len(), 1_u64..=9).prop_map(|(to, distance)| (0, to, distance));
    let rest = proptest::collection::vec((0..NAMES.len(), 0..NAMES.len(), 1_u64..=9), 0..=10);
    (first, rest).prop_map(|(head, mut tail)| {
        tail.insert(0, head);
        tail
    })
}

#[expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]
fn build_graph(edges: &[Edge]) -> PuzzleGraph {
    edges
        .iter()
        .fold(GraphBuilder::new(), |builder, &(from, to, distance)| {
            let from_name = NAMES.get(from).copied().unwrap_or("car");
            let to_name = NAMES.get(to).copied().unwrap_or("car");
            builder.with_edge(from_name, to_name, distance)
        })
        .build()
        .expect("generated graphs always mention the vehicle")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: found routes replay cleanly.
    #[test]
    fn found_routes_pass_audit(
        edges in edges_strategy(),
        budget in 0_u64..=40,
        capacity in 1_usize..=DEFAULT_CAPACITY,
    ) {
        let graph = build_graph(&edges);
        let solver = BacktrackingSolver::with_config(BacktrackingConfig { capacity });
        let response = solver.solve(&graph, budget);
        if let Some(route) = response.outcome.route() {
            prop_assert!(route.total_moves() <= budget);
            prop_assert_eq!(route.len() + 1, graph.len());
            prop_assert_eq!(audit_route(&graph, route, budget, capacity), Ok(()));
        }
    }

    /// Property: the search has no hidden state between runs.
    #[test]
    fn solving_is_deterministic(edges in edges_strategy(), budget in 0_u64..=40) {
        let graph = build_graph(&edges);
        let solver = BacktrackingSolver::new();
        let first = solver.solve(&graph, budget);
        let second = solver.solve(&graph, budget);
        prop_assert_eq!(first.outcome, second.outcome);
        prop_assert_eq!(first.diagnostics.nodes_expanded, second.diagnostics.nodes_expanded);
        prop_assert_eq!(first.diagnostics.backtracks, second.diagnostics.backtracks);
    }

    /// Property: extra budget never turns a solvable puzzle unsolvable.
    #[test]
    fn feasibility_is_monotone_in_budget(
        edges in edges_strategy(),
        budget in 0_u64..=40,
        extra in 0_u64..=20,
    ) {
        let graph = build_graph(&edges);
        let solver = BacktrackingSolver::new();
        if solver.solve(&graph, budget).outcome.is_found() {
            prop_assert!(solver.solve(&graph, budget + extra).outcome.is_found());
        }
    }
}
