//! Command-line interface for the petdet puzzle solver.
//!
//! `petdet solve <PUZZLE>` reads a puzzle file, layers the solver options
//! from flags, environment, and configuration files, runs the backtracking
//! solver, and prints the stops of the route it finds.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod puzzle_file;
mod solve;

pub use error::CliError;
pub use puzzle_file::{PuzzleParseError, parse_puzzle};

use solve::SolveArgs;

const ARG_PUZZLE: &str = "puzzle";
const ARG_CAPACITY: &str = "capacity";
const ARG_VEHICLE: &str = "vehicle";
const ARG_HOME_MARKER: &str = "home-marker";
const ENV_PUZZLE: &str = "PETDET_CMDS_SOLVE_PUZZLE_PATH";

/// Line printed when the solver proves the puzzle infeasible.
pub const NO_SOLUTION: &str = "No solution found.";

/// Run the petdet CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// puzzle cannot be read or parsed, or the result cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "petdet",
    about = "Solve pet-delivery puzzles by exhaustive backtracking",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a route that delivers every pet within the move budget.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
