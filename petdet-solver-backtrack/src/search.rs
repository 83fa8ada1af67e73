//! Depth-first search over ranked neighbours with explicit undo.

use petdet_core::{Distance, NodeRole, PuzzleGraph, Route, UNREACHABLE};

use crate::passengers::Passengers;

/// Work counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    pub(crate) nodes_expanded: u64,
    pub(crate) backtracks: u64,
}

/// Mutable state for a single search, discarded once it produces a result.
///
/// Recursion depth is bounded by the node count because a branch never
/// revisits a node.
pub(crate) struct Search<'g> {
    graph: &'g PuzzleGraph,
    budget: Distance,
    visited: Vec<bool>,
    visited_count: usize,
    passengers: Passengers,
    /// Stops recorded while unwinding a successful branch, last stop first.
    unwound: Vec<usize>,
    total_moves: Distance,
    stats: SearchStats,
}

impl<'g> Search<'g> {
    pub(crate) fn new(graph: &'g PuzzleGraph, budget: Distance, capacity: usize) -> Self {
        let mut visited = vec![false; graph.len()];
        if let Some(start) = visited.get_mut(graph.vehicle()) {
            *start = true;
        }
        Self {
            graph,
            budget,
            visited,
            visited_count: 1,
            passengers: Passengers::with_capacity(capacity),
            unwound: Vec::with_capacity(graph.len()),
            total_moves: 0,
            stats: SearchStats::default(),
        }
    }

    /// Run the search from the vehicle node.
    pub(crate) fn run(mut self) -> (Option<Route>, SearchStats) {
        let found = self.explore(self.graph.vehicle(), 0);
        let route = found.then(|| {
            let mut stops = std::mem::take(&mut self.unwound);
            stops.reverse();
            Route::new(stops, self.total_moves)
        });
        (route, self.stats)
    }

    fn explore(&mut self, node: usize, moves: Distance) -> bool {
        self.stats.nodes_expanded += 1;

        // Success is checked before acting on `node`, so a branch may finish
        // on a home or pet whose obligation is left unresolved.
        if moves <= self.budget && self.all_visited() {
            self.total_moves = moves;
            return true;
        }
        if moves > self.budget {
            return false;
        }
        if !self.arrive(node) {
            return false;
        }

        let graph = self.graph;
        for &next in graph.neighbours().of(node) {
            if self.is_visited(next) {
                continue;
            }
            let weight = graph.distance(node, next);
            if weight >= UNREACHABLE {
                continue;
            }

            let mark = self.passengers.mark();
            self.set_visited(next, true);
            if self.explore(next, moves.saturating_add(weight)) {
                self.unwound.push(next);
                return true;
            }
            self.set_visited(next, false);
            self.passengers.rollback(mark);
            self.stats.backtracks += 1;
        }
        false
    }

    /// Apply the role action at `node`; `false` ends the branch.
    fn arrive(&mut self, node: usize) -> bool {
        let graph = self.graph;
        let Some(here) = graph.node(node) else {
            return false;
        };
        let accepted = match here.role() {
            NodeRole::Home => self
                .passengers
                .unload_first(|pet| {
                    graph
                        .node(pet)
                        .is_some_and(|carried| here.accepts(carried))
                })
                .is_some(),
            NodeRole::Pet => self.passengers.load(node),
            NodeRole::Vehicle => true,
        };
        log::trace!(
            "at {} ({:?}): accepted={accepted}, carrying {:?}",
            here.name(),
            here.role(),
            self.passengers.pets()
        );
        accepted
    }

    fn all_visited(&self) -> bool {
        self.visited_count == self.visited.len()
    }

    fn is_visited(&self, node: usize) -> bool {
        self.visited.get(node).copied().unwrap_or(true)
    }

    fn set_visited(&mut self, node: usize, value: bool) {
        if let Some(flag) = self.visited.get_mut(node) {
            if *flag != value {
                *flag = value;
                if value {
                    self.visited_count += 1;
                } else {
                    self.visited_count -= 1;
                }
            }
        }
    }
}
