//! Exhaustive backtracking solver for petdet puzzles.
//!
//! This crate provides [`BacktrackingSolver`], the default implementation of
//! the [`Solver`](petdet_core::Solver) trait. Starting at the vehicle, it walks
//! each node's neighbours nearest first, picking up pets and dropping them at
//! matching homes, and backtracks whenever the budget, the carrying capacity,
//! or a home without a matching pet ends a branch. The first route that
//! visits every node within budget is returned.
//!
//! Carried pets are tracked with an undo trail, so every change made inside a
//! failed branch is rolled back before the next neighbour is tried.

#![forbid(unsafe_code)]

mod passengers;
mod search;
mod solver;

pub use solver::{BacktrackingConfig, BacktrackingSolver, DEFAULT_CAPACITY};
