//! Solve command implementation for the petdet CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use petdet_core::{
    DEFAULT_HOME_MARKER, DEFAULT_VEHICLE_NAME, Distance, NamingRules, Puzzle, PuzzleGraph,
    SolveOutcome, SolveResponse, Solver, audit_route,
};
use petdet_solver_backtrack::{BacktrackingConfig, BacktrackingSolver, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_CAPACITY, ARG_HOME_MARKER, ARG_PUZZLE, ARG_VEHICLE, CliError, ENV_PUZZLE, NO_SOLUTION,
    parse_puzzle,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a pet-delivery puzzle. The puzzle file holds the move \
                 budget on its first line followed by one `name name distance` \
                 edge per line. Solver options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Solve a pet-delivery puzzle"
)]
#[ortho_config(prefix = "PETDET")]
pub(crate) struct SolveArgs {
    /// Path to the puzzle file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) puzzle_path: Option<Utf8PathBuf>,
    /// Number of pets the vehicle can carry at once (default 4).
    #[arg(long = ARG_CAPACITY, value_name = "pets")]
    #[serde(default)]
    pub(crate) capacity: Option<usize>,
    /// Name of the node the vehicle starts at (default `car`).
    #[arg(long = ARG_VEHICLE, value_name = "name")]
    #[serde(default)]
    pub(crate) vehicle: Option<String>,
    /// Substring marking a node as a home (default `_home`).
    #[arg(long = ARG_HOME_MARKER, value_name = "text")]
    #[serde(default)]
    pub(crate) home_marker: Option<String>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the puzzle file.
    pub(crate) puzzle_path: Utf8PathBuf,
    /// Solver settings.
    pub(crate) solver: BacktrackingConfig,
    /// Conventions used to classify node names.
    pub(crate) rules: NamingRules,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.puzzle_path, ARG_PUZZLE)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let puzzle_path = args.puzzle_path.ok_or(CliError::MissingArgument {
            field: ARG_PUZZLE,
            env: ENV_PUZZLE,
        })?;
        let solver = BacktrackingConfig {
            capacity: args.capacity.unwrap_or(DEFAULT_CAPACITY),
        };
        let rules = NamingRules::new(
            args.vehicle
                .unwrap_or_else(|| DEFAULT_VEHICLE_NAME.to_owned()),
            args.home_marker
                .unwrap_or_else(|| DEFAULT_HOME_MARKER.to_owned()),
        );
        Ok(Self {
            puzzle_path,
            solver,
            rules,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver>;
}

pub(super) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver> {
        Box::new(BacktrackingSolver::with_config(config.solver.clone()))
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let puzzle = load_puzzle(&config.puzzle_path)?;
    let graph = puzzle.graph(&config.rules)?;
    let solver = builder.build(&config);
    let response = solver.solve(&graph, puzzle.budget);
    report_diagnostics(&config, &graph, puzzle.budget, &response);
    write_outcome(writer, &graph, &response.outcome)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a puzzle file from disk.
pub(super) fn load_puzzle(path: &Utf8Path) -> Result<Puzzle, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPuzzle {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(BufReader::new(file)).map_err(|source| CliError::ParsePuzzle {
        path: path.to_path_buf(),
        source,
    })
}

fn report_diagnostics(
    config: &SolveConfig,
    graph: &PuzzleGraph,
    budget: Distance,
    response: &SolveResponse,
) {
    let diagnostics = &response.diagnostics;
    log::info!(
        "solved in {:?}: {} nodes expanded, {} backtracks",
        diagnostics.solve_time,
        diagnostics.nodes_expanded,
        diagnostics.backtracks
    );
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    if let Some(route) = response.outcome.route() {
        match audit_route(graph, route, budget, config.solver.capacity) {
            Ok(()) => log::debug!("route passed audit"),
            Err(violation) => log::warn!("route failed audit: {violation}"),
        }
    }
}

fn write_outcome(
    writer: &mut dyn Write,
    graph: &PuzzleGraph,
    outcome: &SolveOutcome,
) -> Result<(), CliError> {
    match outcome {
        SolveOutcome::Found(route) => {
            for name in graph.stop_names(route) {
                writeln!(writer, "{name}").map_err(CliError::WriteSolveOutput)?;
            }
        }
        SolveOutcome::Infeasible => {
            writeln!(writer, "{NO_SOLUTION}").map_err(CliError::WriteSolveOutput)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
