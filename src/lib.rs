//! Facade crate for the petdet pet-delivery puzzle solver.
//!
//! This crate re-exports the core domain types and exposes the default
//! backtracking solver behind a feature flag.
//!
//! ```
//! # #[cfg(feature = "solver-backtrack")]
//! # fn main() -> Result<(), petdet::GraphError> {
//! use petdet::{BacktrackingSolver, NamingRules, Puzzle, Solver};
//!
//! let puzzle = Puzzle::new(10)
//!     .with_edge("car", "dog", 3)
//!     .with_edge("dog", "dog_home", 2);
//! let graph = puzzle.graph(&NamingRules::default())?;
//! let response = BacktrackingSolver::new().solve(&graph, puzzle.budget);
//! assert!(response.outcome.is_found());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "solver-backtrack"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use petdet_core::{
    DEFAULT_HOME_MARKER, DEFAULT_VEHICLE_NAME, Diagnostics, Distance, DistanceMatrix, EdgeMatrix,
    EdgeRecord, GraphBuilder, GraphError, MAX_DISTANCE, NamingRules, NeighbourOrder, Node,
    NodeRole, Puzzle, PuzzleGraph, Route, RouteViolation, SolveOutcome, SolveResponse, Solver,
    UNREACHABLE, audit_route,
};

#[cfg(feature = "solver-backtrack")]
pub use petdet_solver_backtrack::{BacktrackingConfig, BacktrackingSolver, DEFAULT_CAPACITY};
