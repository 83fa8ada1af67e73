//! Plain-text puzzle format.
//!
//! The first non-blank line holds the move budget. Every further non-blank
//! line holds one undirected edge as `name name distance`, separated by
//! whitespace. Budgets and distances must not exceed
//! [`MAX_DISTANCE`]. Parsing stops at the first bad line.

use std::io::BufRead;

use petdet_core::{Distance, EdgeRecord, MAX_DISTANCE, Puzzle};
use thiserror::Error;

/// Errors raised while reading a puzzle file.
#[derive(Debug, Error)]
pub enum PuzzleParseError {
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read when the reader failed.
        line: usize,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The input holds no non-blank lines.
    #[error("expected a move budget but the puzzle is empty")]
    MissingBudget,
    /// The budget line is not an integer in `0..=MAX_DISTANCE`.
    #[error("line {line}: invalid move budget {text:?}")]
    InvalidBudget {
        /// Line holding the budget.
        line: usize,
        /// Budget text as written.
        text: String,
    },
    /// An edge line does not have exactly three fields.
    #[error("line {line}: expected `name name distance`, found {text:?}")]
    MalformedEdge {
        /// Line holding the edge.
        line: usize,
        /// Edge text as written.
        text: String,
    },
    /// An edge distance is not an integer in `0..=MAX_DISTANCE`.
    #[error("line {line}: invalid distance {text:?}")]
    InvalidDistance {
        /// Line holding the edge.
        line: usize,
        /// Distance field as written.
        text: String,
    },
}

/// Parse a puzzle from `reader`.
///
/// # Errors
///
/// Returns [`PuzzleParseError`] naming the 1-based line that failed.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use petdet_cli::parse_puzzle;
///
/// # fn main() -> Result<(), petdet_cli::PuzzleParseError> {
/// let puzzle = parse_puzzle(Cursor::new("10\ncar dog 3\ndog dog_home 2\n"))?;
/// assert_eq!(puzzle.budget, 10);
/// assert_eq!(puzzle.edges.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn parse_puzzle(reader: impl BufRead) -> Result<Puzzle, PuzzleParseError> {
    let mut budget = None;
    let mut edges = Vec::new();

    for (offset, read) in reader.lines().enumerate() {
        let line = offset + 1;
        let text = read.map_err(|source| PuzzleParseError::Read { line, source })?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if budget.is_none() {
            budget = Some(parse_budget(line, trimmed)?);
        } else {
            edges.push(parse_edge(line, trimmed)?);
        }
    }

    let Some(moves) = budget else {
        return Err(PuzzleParseError::MissingBudget);
    };
    log::debug!("parsed puzzle with budget {moves} and {} edges", edges.len());
    Ok(Puzzle {
        budget: moves,
        edges,
    })
}

fn parse_budget(line: usize, text: &str) -> Result<Distance, PuzzleParseError> {
    parse_bounded(text).ok_or_else(|| PuzzleParseError::InvalidBudget {
        line,
        text: text.to_owned(),
    })
}

fn parse_edge(line: usize, text: &str) -> Result<EdgeRecord, PuzzleParseError> {
    let mut fields = text.split_whitespace();
    let (Some(from), Some(to), Some(raw_distance), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(PuzzleParseError::MalformedEdge {
            line,
            text: text.to_owned(),
        });
    };
    let distance =
        parse_bounded(raw_distance).ok_or_else(|| PuzzleParseError::InvalidDistance {
            line,
            text: raw_distance.to_owned(),
        })?;
    Ok(EdgeRecord::new(from, to, distance))
}

fn parse_bounded(text: &str) -> Option<Distance> {
    text.parse::<Distance>()
        .ok()
        .filter(|&value| value <= MAX_DISTANCE)
}
