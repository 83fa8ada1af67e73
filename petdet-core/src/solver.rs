//! The seam between a puzzle graph and the search strategies that solve it.

use std::time::Duration;

use crate::{Distance, PuzzleGraph, SolveOutcome};

/// Counters describing how much work a search performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Wall-clock time spent searching.
    pub solve_time: Duration,
    /// Search calls made, including the call at the start node.
    pub nodes_expanded: u64,
    /// Branches abandoned and undone.
    pub backtracks: u64,
}

/// Response from a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResponse {
    /// Route or infeasibility verdict.
    pub outcome: SolveOutcome,
    /// Work counters for the search.
    pub diagnostics: Diagnostics,
}

/// Find a visiting order for every node of a puzzle within a move budget.
///
/// Solvers always terminate with an outcome; an infeasible puzzle is reported
/// through [`SolveOutcome::Infeasible`] rather than an error.
/// Solvers must be `Send + Sync` so they can be boxed and shared.
pub trait Solver: Send + Sync {
    /// Search `graph`, starting at its vehicle node, for a route costing at
    /// most `budget` moves.
    fn solve(&self, graph: &PuzzleGraph, budget: Distance) -> SolveResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphBuilder, Route};
    use rstest::rstest;

    struct FixedSolver;

    impl Solver for FixedSolver {
        fn solve(&self, graph: &PuzzleGraph, budget: Distance) -> SolveResponse {
            let outcome = if budget >= graph.distance(0, 1) {
                SolveOutcome::Found(Route::new(vec![1], graph.distance(0, 1)))
            } else {
                SolveOutcome::Infeasible
            };
            SolveResponse {
                outcome,
                diagnostics: Diagnostics::default(),
            }
        }
    }

    #[rstest]
    #[case(3, true)]
    #[case(2, false)]
    fn boxed_solver_reports_outcome(#[case] budget: Distance, #[case] found: bool) {
        let graph = GraphBuilder::new()
            .with_edge("car", "dog", 3)
            .build()
            .expect("graph should build");
        let solver: Box<dyn Solver> = Box::new(FixedSolver);
        let response = solver.solve(&graph, budget);
        assert_eq!(response.outcome.is_found(), found);
    }
}
