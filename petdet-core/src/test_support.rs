//! Test-only puzzle fixtures shared by unit, behaviour, and property tests.

use crate::{Distance, GraphBuilder, GraphError, Puzzle, PuzzleGraph};

/// Edges of the canonical single-pet puzzle.
///
/// The direct `car`-`dog_home` edge is a decoy: going through `dog` costs 5.
pub const SINGLE_PET_EDGES: [(&str, &str, Distance); 3] = [
    ("car", "dog", 3),
    ("dog", "dog_home", 2),
    ("car", "dog_home", 100),
];

/// The canonical single-pet puzzle with the given budget.
#[must_use]
pub fn single_pet_puzzle(budget: Distance) -> Puzzle {
    SINGLE_PET_EDGES
        .iter()
        .fold(Puzzle::new(budget), |puzzle, &(from, to, distance)| {
            puzzle.with_edge(from, to, distance)
        })
}

/// Build a graph from `(from, to, distance)` triples using default rules.
///
/// # Errors
///
/// Propagates [`GraphError`] from [`GraphBuilder::build`].
pub fn graph_from_edges(edges: &[(&str, &str, Distance)]) -> Result<PuzzleGraph, GraphError> {
    edges
        .iter()
        .fold(GraphBuilder::new(), |builder, &(from, to, distance)| {
            builder.with_edge(from, to, distance)
        })
        .build()
}

/// Star graph: the vehicle joined to each named pet by a unit edge.
///
/// # Errors
///
/// Propagates [`GraphError`] from [`GraphBuilder::build`].
pub fn star_graph(pets: &[&str]) -> Result<PuzzleGraph, GraphError> {
    pets.iter()
        .fold(GraphBuilder::new(), |builder, pet| {
            builder.with_edge("car", pet, 1)
        })
        .build()
}
