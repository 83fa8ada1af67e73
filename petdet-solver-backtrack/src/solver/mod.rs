//! `BacktrackingSolver` implementation of the core [`Solver`] trait.

use std::time::Instant;

use petdet_core::{
    Diagnostics, Distance, MAX_DISTANCE, PuzzleGraph, SolveOutcome, SolveResponse, Solver,
};

use crate::search::Search;

/// Pets the vehicle can carry at once unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 4;

/// Configuration for [`BacktrackingSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktrackingConfig {
    /// Maximum number of pets carried simultaneously.
    pub capacity: usize,
}

impl Default for BacktrackingConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Exhaustive depth-first solver returning the first feasible route.
///
/// Neighbours are tried nearest first, so the search is biased toward short
/// hops, but the route returned is not guaranteed to be the cheapest.
/// Budgets above [`MAX_DISTANCE`] are capped to it.
///
/// # Examples
/// ```
/// use petdet_core::{GraphBuilder, SolveOutcome, Solver};
/// use petdet_solver_backtrack::BacktrackingSolver;
///
/// # fn main() -> Result<(), petdet_core::GraphError> {
/// let graph = GraphBuilder::new()
///     .with_edge("car", "dog", 3)
///     .with_edge("dog", "dog_home", 2)
///     .build()?;
/// let response = BacktrackingSolver::new().solve(&graph, 10);
/// let route = response.outcome.route().map(|route| route.stops().to_vec());
/// assert_eq!(route, Some(vec![1, 2]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSolver {
    config: BacktrackingConfig,
}

impl BacktrackingSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BacktrackingConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: BacktrackingConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BacktrackingConfig {
        &self.config
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, graph: &PuzzleGraph, budget: Distance) -> SolveResponse {
        let started_at = Instant::now();
        let capped = budget.min(MAX_DISTANCE);
        log::debug!(
            "searching {} nodes with budget {capped} and capacity {}",
            graph.len(),
            self.config.capacity
        );

        let (route, stats) = Search::new(graph, capped, self.config.capacity).run();
        let outcome = route.map_or(SolveOutcome::Infeasible, SolveOutcome::Found);
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            nodes_expanded: stats.nodes_expanded,
            backtracks: stats.backtracks,
        };

        match &outcome {
            SolveOutcome::Found(found) => log::debug!(
                "found route of {} stops costing {} after {} expansions",
                found.len(),
                found.total_moves(),
                diagnostics.nodes_expanded
            ),
            SolveOutcome::Infeasible => log::debug!(
                "no feasible route after {} expansions and {} backtracks",
                diagnostics.nodes_expanded,
                diagnostics.backtracks
            ),
        }

        SolveResponse {
            outcome,
            diagnostics,
        }
    }
}
