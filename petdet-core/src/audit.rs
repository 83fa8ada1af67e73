//! Replay a route and check it against the puzzle rules.
//!
//! The replay mirrors the search: the vehicle starts with nothing on board,
//! each stop is charged its completed distance, and the pick-up or drop-off
//! at a stop happens on arrival. The last stop is the exception. A search
//! declares success as soon as every node is visited, before acting on the
//! node it is standing on, so the final stop's role is never applied.

use thiserror::Error;

use crate::{Distance, Node, NodeRole, PuzzleGraph, Route, UNREACHABLE};

/// Reasons a route fails [`audit_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteViolation {
    /// A stop names a node the graph does not contain.
    #[error("stop {index} is not a node of the graph")]
    UnknownNode {
        /// Offending node index.
        index: usize,
    },
    /// A node appears twice, or the route returns to the vehicle.
    #[error("node {index} is visited more than once")]
    Revisited {
        /// Offending node index.
        index: usize,
    },
    /// A stop cannot be reached from the previous one.
    #[error("node {index} cannot be reached from the previous stop")]
    Unreachable {
        /// Offending node index.
        index: usize,
    },
    /// The route ends before every node is visited.
    #[error("node {index} is never visited")]
    Unvisited {
        /// First node left out.
        index: usize,
    },
    /// A pet was picked up with the vehicle already full.
    #[error("picking up node {index} exceeds capacity {capacity}")]
    CapacityExceeded {
        /// Pet that did not fit.
        index: usize,
        /// Configured capacity.
        capacity: usize,
    },
    /// A home was passed without a matching pet on board.
    #[error("home node {index} is visited without a matching pet")]
    UnmatchedHome {
        /// Offending home.
        index: usize,
    },
    /// Cumulative moves went over the budget.
    #[error("route needs {moves} moves but the budget is {budget}")]
    BudgetExceeded {
        /// Moves accumulated when the budget was broken.
        moves: Distance,
        /// Allowed moves.
        budget: Distance,
    },
    /// The route's recorded total disagrees with the replay.
    #[error("route reports {reported} moves but replay totals {replayed}")]
    TotalMismatch {
        /// Total stored in the route.
        reported: Distance,
        /// Total recomputed by the replay.
        replayed: Distance,
    },
}

/// Check that `route` is a valid answer for `graph` under `budget` and
/// `capacity`.
///
/// # Errors
///
/// Returns the first [`RouteViolation`] met while replaying the route.
///
/// # Examples
/// ```
/// use petdet_core::{GraphBuilder, Route, audit_route};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = GraphBuilder::new()
///     .with_edge("car", "dog", 3)
///     .with_edge("dog", "dog_home", 2)
///     .build()?;
/// audit_route(&graph, &Route::new(vec![1, 2], 5), 10, 4)?;
/// assert!(audit_route(&graph, &Route::new(vec![1, 2], 5), 4, 4).is_err());
/// # Ok(())
/// # }
/// ```
pub fn audit_route(
    graph: &PuzzleGraph,
    route: &Route,
    budget: Distance,
    capacity: usize,
) -> Result<(), RouteViolation> {
    let mut visited = vec![false; graph.len()];
    if let Some(start) = visited.get_mut(graph.vehicle()) {
        *start = true;
    }
    let mut carried: Vec<&Node> = Vec::new();
    let mut at = graph.vehicle();
    let mut moves: Distance = 0;
    let last = route.len().checked_sub(1);

    for (position, &index) in route.stops().iter().enumerate() {
        let node = graph
            .node(index)
            .ok_or(RouteViolation::UnknownNode { index })?;
        let seen = visited
            .get_mut(index)
            .ok_or(RouteViolation::UnknownNode { index })?;
        if *seen {
            return Err(RouteViolation::Revisited { index });
        }
        *seen = true;

        let leg = graph.distance(at, index);
        if leg >= UNREACHABLE {
            return Err(RouteViolation::Unreachable { index });
        }
        moves = moves.saturating_add(leg);
        if moves > budget {
            return Err(RouteViolation::BudgetExceeded { moves, budget });
        }
        at = index;

        if Some(position) == last {
            break;
        }
        match node.role() {
            NodeRole::Home => {
                let slot = carried
                    .iter()
                    .position(|pet| node.accepts(pet))
                    .ok_or(RouteViolation::UnmatchedHome { index })?;
                carried.remove(slot);
            }
            NodeRole::Pet => {
                if carried.len() >= capacity {
                    return Err(RouteViolation::CapacityExceeded { index, capacity });
                }
                carried.push(node);
            }
            NodeRole::Vehicle => {}
        }
    }

    if let Some(index) = visited.iter().position(|seen| !seen) {
        return Err(RouteViolation::Unvisited { index });
    }
    if moves != route.total_moves() {
        return Err(RouteViolation::TotalMismatch {
            reported: route.total_moves(),
            replayed: moves,
        });
    }
    Ok(())
}
