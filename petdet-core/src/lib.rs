//! Core domain types for the petdet puzzle solver.
//!
//! A vehicle starts at a fixed node of a weighted, undirected graph and must
//! visit every node within a move budget, picking up pets and dropping each
//! one at a home whose name contains the pet's name. This crate models the
//! puzzle and prepares it for search:
//!
//! - [`GraphBuilder`] interns node names and records direct edges.
//! - [`EdgeMatrix::complete`] turns sparse edges into all-pairs shortest
//!   distances.
//! - [`NeighbourOrder`] ranks every node's neighbours, nearest first.
//! - [`Solver`] is the seam implemented by search strategies.
//! - [`audit_route`] replays a route against the puzzle rules.

#![forbid(unsafe_code)]

mod audit;
mod distance;
mod graph;
mod neighbour;
mod node;
mod puzzle;
mod route;
mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use audit::{RouteViolation, audit_route};
pub use distance::{Distance, DistanceMatrix, EdgeMatrix, MAX_DISTANCE, UNREACHABLE};
pub use graph::{GraphBuilder, GraphError, PuzzleGraph};
pub use neighbour::NeighbourOrder;
pub use node::{DEFAULT_HOME_MARKER, DEFAULT_VEHICLE_NAME, NamingRules, Node, NodeRole};
pub use puzzle::{EdgeRecord, Puzzle};
pub use route::{Route, SolveOutcome};
pub use solver::{Diagnostics, SolveResponse, Solver};
