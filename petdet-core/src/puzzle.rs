//! Raw puzzle input: a move budget and a list of named edges.

use crate::{Distance, GraphBuilder, GraphError, NamingRules, PuzzleGraph};

/// One undirected edge as read from a puzzle description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Name of one endpoint.
    pub from: String,
    /// Name of the other endpoint.
    pub to: String,
    /// Edge weight in moves.
    pub distance: Distance,
}

impl EdgeRecord {
    /// Construct an edge record.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: Distance) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// A puzzle instance before any graph processing.
///
/// # Examples
/// ```
/// use petdet_core::{NamingRules, Puzzle};
///
/// # fn main() -> Result<(), petdet_core::GraphError> {
/// let puzzle = Puzzle::new(10)
///     .with_edge("car", "dog", 3)
///     .with_edge("dog", "dog_home", 2);
/// let graph = puzzle.graph(&NamingRules::default())?;
/// assert_eq!(graph.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    /// Maximum total edge weight the vehicle may travel.
    pub budget: Distance,
    /// Edges in input order.
    pub edges: Vec<EdgeRecord>,
}

impl Puzzle {
    /// Construct a puzzle with no edges.
    #[must_use]
    pub const fn new(budget: Distance) -> Self {
        Self {
            budget,
            edges: Vec::new(),
        }
    }

    /// Append an edge while returning `self` for chaining.
    #[must_use]
    pub fn with_edge(mut self, from: &str, to: &str, distance: Distance) -> Self {
        self.edges.push(EdgeRecord::new(from, to, distance));
        self
    }

    /// Feed every edge, in order, through a [`GraphBuilder`].
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from [`GraphBuilder::build`].
    pub fn graph(&self, rules: &NamingRules) -> Result<PuzzleGraph, GraphError> {
        let mut builder = GraphBuilder::with_rules(rules.clone());
        for edge in &self.edges {
            builder.add_edge(&edge.from, &edge.to, edge.distance);
        }
        builder.build()
    }
}
