//! Assemble a puzzle graph from named edges.
//!
//! [`GraphBuilder`] interns node names in first-seen order, derives their
//! roles, and records direct edges. [`GraphBuilder::build`] then completes the
//! distances and ranks neighbours, producing an immutable [`PuzzleGraph`].

use std::collections::HashMap;

use thiserror::Error;

use crate::{
    Distance, DistanceMatrix, EdgeMatrix, MAX_DISTANCE, NamingRules, NeighbourOrder, Node,
    NodeRole, Route, UNREACHABLE,
};

/// Errors returned by [`GraphBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No edges were supplied, so the graph has no nodes.
    #[error("puzzle graph contains no nodes")]
    Empty,
    /// No node carries the vehicle name, so the search has nowhere to start.
    #[error("puzzle graph has no vehicle node named {name:?}")]
    MissingVehicle {
        /// Vehicle name the builder looked for.
        name: String,
    },
    /// An edge weight is too large to tell apart from an unreachable pair.
    #[error("edge {from:?}-{to:?} has distance {distance}, above the limit of {MAX_DISTANCE}")]
    DistanceTooLarge {
        /// First endpoint of the offending edge.
        from: String,
        /// Second endpoint of the offending edge.
        to: String,
        /// Weight supplied for the edge.
        distance: Distance,
    },
}

/// Incrementally collect nodes and edges for a [`PuzzleGraph`].
///
/// # Examples
/// ```
/// use petdet_core::GraphBuilder;
///
/// # fn main() -> Result<(), petdet_core::GraphError> {
/// let graph = GraphBuilder::new()
///     .with_edge("car", "dog", 3)
///     .with_edge("dog", "dog_home", 2)
///     .build()?;
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.distance(0, 2), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    rules: NamingRules,
    nodes: Vec<Node>,
    index_by_name: HashMap<String, usize>,
    edges: EdgeMatrix,
    oversized: Option<GraphError>,
}

impl GraphBuilder {
    /// Construct a builder using the default naming rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a builder using explicit naming rules.
    #[must_use]
    pub fn with_rules(rules: NamingRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Number of distinct nodes seen so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Record an undirected edge between two named nodes.
    ///
    /// Unseen names become new nodes. A repeated pair keeps the last weight.
    /// Self-edges register the node but are otherwise ignored. A weight above
    /// [`MAX_DISTANCE`] is remembered and reported by [`Self::build`].
    pub fn add_edge(&mut self, from: &str, to: &str, distance: Distance) {
        let from_index = self.intern(from);
        let to_index = self.intern(to);
        if from_index == to_index {
            log::warn!("ignoring self-edge on {from:?}");
            return;
        }
        if distance > MAX_DISTANCE && self.oversized.is_none() {
            self.oversized = Some(GraphError::DistanceTooLarge {
                from: from.to_owned(),
                to: to.to_owned(),
                distance,
            });
        }
        if let Some(previous) = self.edges.direct(from_index, to_index) {
            log::debug!("edge {from:?}-{to:?} replaces weight {previous} with {distance}");
        }
        self.edges.connect(from_index, to_index, distance);
    }

    /// Record an edge while returning `self` for chaining.
    #[must_use]
    pub fn with_edge(mut self, from: &str, to: &str, distance: Distance) -> Self {
        self.add_edge(from, to, distance);
        self
    }

    /// Complete distances, rank neighbours, and freeze the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Empty`] when no nodes were added,
    /// [`GraphError::DistanceTooLarge`] for the first edge weight above
    /// [`MAX_DISTANCE`], and [`GraphError::MissingVehicle`] when no node has
    /// the vehicle name.
    pub fn build(self) -> Result<PuzzleGraph, GraphError> {
        if self.nodes.is_empty() {
            return Err(GraphError::Empty);
        }
        if let Some(err) = self.oversized {
            return Err(err);
        }
        let vehicle = self
            .nodes
            .iter()
            .find(|node| node.role() == NodeRole::Vehicle)
            .map(Node::index)
            .ok_or_else(|| GraphError::MissingVehicle {
                name: self.rules.vehicle_name().to_owned(),
            })?;

        let distances = self.edges.complete();
        let neighbours = NeighbourOrder::from_distances(&distances);
        log::debug!(
            "built puzzle graph with {} nodes, vehicle at index {vehicle}",
            self.nodes.len()
        );
        Ok(PuzzleGraph {
            nodes: self.nodes,
            distances,
            neighbours,
            vehicle,
        })
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&index) = self.index_by_name.get(name) {
            return index;
        }
        let index = self.edges.grow();
        let role = self.rules.classify(name);
        self.nodes.push(Node::new(name, index, role));
        self.index_by_name.insert(name.to_owned(), index);
        index
    }
}

/// Immutable puzzle graph: node arena, completed distances, neighbour order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGraph {
    nodes: Vec<Node>,
    distances: DistanceMatrix,
    neighbours: NeighbourOrder,
    vehicle: usize,
}

impl PuzzleGraph {
    /// All nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node at `index`, if any.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Index of the node called `name`, if any.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.nodes
            .iter()
            .find(|node| node.name() == name)
            .map(Node::index)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes. Built graphs always have the vehicle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the vehicle node where every search starts.
    #[must_use]
    pub const fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Completed shortest distances.
    #[must_use]
    pub const fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Neighbour ranking derived from [`Self::distances`].
    #[must_use]
    pub const fn neighbours(&self) -> &NeighbourOrder {
        &self.neighbours
    }

    /// Shortest distance between two nodes; [`UNREACHABLE`] when no path or
    /// node exists.
    #[must_use]
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.distances.get(from, to).unwrap_or(UNREACHABLE)
    }

    /// Names of the stops along `route`, in travel order.
    pub fn stop_names<'a>(&'a self, route: &'a Route) -> impl Iterator<Item = &'a str> + 'a {
        route
            .stops()
            .iter()
            .filter_map(|&stop| self.node(stop))
            .map(Node::name)
    }
}
