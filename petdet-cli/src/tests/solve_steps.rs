//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{SINGLE_PET_PUZZLE, Workspace};
use super::*;
use crate::solve::{DefaultSolveSolverBuilder, run_solve_with};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct SolveWorld {
    workspace: Workspace,
    puzzle_path: Utf8PathBuf,
    include_puzzle: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let puzzle_path = workspace.path("puzzle.txt");
        Self {
            workspace,
            puzzle_path,
            include_puzzle: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn write_puzzle(&self, contents: &str) {
        let written = self.workspace.puzzle("puzzle.txt", contents);
        assert_eq!(written, self.puzzle_path);
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["petdet".to_owned(), "solve".to_owned()];
        if *self.include_puzzle.borrow() {
            argv.push(self.puzzle_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn expect_error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

#[given("the single pet puzzle file exists on disk")]
fn single_pet_puzzle_exists(#[from(world)] world: &SolveWorld) {
    world.write_puzzle(SINGLE_PET_PUZZLE);
}

#[given("the single pet puzzle file with a budget of one move")]
fn single_pet_puzzle_tight_budget(#[from(world)] world: &SolveWorld) {
    world.write_puzzle("1\ncar dog 3\ndog dog_home 2\ncar dog_home 100\n");
}

#[given("a puzzle file with two pets in a row")]
fn two_pets_in_a_row(#[from(world)] world: &SolveWorld) {
    world.write_puzzle("10\ncar ant 1\nant bee 1\nbee ant_home 1\n");
}

#[given("a puzzle file with a malformed edge line")]
fn malformed_puzzle(#[from(world)] world: &SolveWorld) {
    world.write_puzzle("10\ncar dog 3\ndog dog_home\n");
}

#[given("I pass a capacity of one")]
fn pass_capacity_one(#[from(world)] world: &SolveWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_CAPACITY}"), "1".to_owned()]);
}

#[given("I omit the puzzle path")]
fn omit_puzzle_path(#[from(world)] world: &SolveWorld) {
    *world.include_puzzle.borrow_mut() = false;
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Solve(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_solve_with(args, &DefaultSolveSolverBuilder, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

fn printed_lines(world: &SolveWorld) -> Vec<String> {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    stdout.lines().map(str::to_owned).collect()
}

#[then("the command prints the stops dog, dog_home")]
fn prints_dog_route(#[from(world)] world: &SolveWorld) {
    assert_eq!(printed_lines(world), ["dog", "dog_home"]);
}

#[then("the command prints the stops ant, ant_home, bee")]
fn prints_capacity_one_route(#[from(world)] world: &SolveWorld) {
    assert_eq!(printed_lines(world), ["ant", "ant_home", "bee"]);
}

#[then("the command prints the stops ant, bee, ant_home")]
fn prints_default_capacity_route(#[from(world)] world: &SolveWorld) {
    assert_eq!(printed_lines(world), ["ant", "bee", "ant_home"]);
}

#[then("the command prints that no solution was found")]
fn prints_no_solution(#[from(world)] world: &SolveWorld) {
    assert_eq!(printed_lines(world), [NO_SOLUTION]);
}

#[then("the command fails because the puzzle cannot be parsed")]
fn fails_to_parse(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::ParsePuzzle { source, .. } => {
            assert!(matches!(source, PuzzleParseError::MalformedEdge { line: 3, .. }));
        }
        other => panic!("expected ParsePuzzle, found {other:?}"),
    }
}

#[then("the command fails because the puzzle path is missing")]
fn fails_missing_path(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PUZZLE),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_single_pet, "solving the single pet puzzle");
register_solve_scenario!(solve_infeasible, "reporting an infeasible puzzle");
register_solve_scenario!(solve_capacity_one, "a smaller capacity changes the route");
register_solve_scenario!(solve_default_capacity, "the default capacity carries both pets");
register_solve_scenario!(solve_malformed, "rejecting malformed puzzle files");
register_solve_scenario!(solve_missing_path, "rejecting missing puzzle paths");
