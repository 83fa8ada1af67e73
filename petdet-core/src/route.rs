//! Routes found by a solver and the outcome of a search.

use crate::Distance;

/// Ordered stops visited after leaving the vehicle node.
///
/// # Examples
/// ```
/// use petdet_core::Route;
///
/// let route = Route::new(vec![1, 2], 5);
/// assert_eq!(route.stops(), &[1, 2]);
/// assert_eq!(route.total_moves(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    stops: Vec<usize>,
    total_moves: Distance,
}

impl Route {
    /// Construct a route from node indices in travel order and its total cost.
    #[must_use]
    pub const fn new(stops: Vec<usize>, total_moves: Distance) -> Self {
        Self { stops, total_moves }
    }

    /// Construct a route with no stops, used when the vehicle is the only node.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Node indices in travel order, excluding the start.
    #[must_use]
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Sum of completed distances between consecutive stops.
    #[must_use]
    pub const fn total_moves(&self) -> Distance {
        self.total_moves
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Result of a search: a feasible route or proof that none exists.
///
/// Infeasibility is an expected answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The first feasible route found.
    Found(Route),
    /// Every branch was exhausted without satisfying the constraints.
    Infeasible,
}

impl SolveOutcome {
    /// The route, when one was found.
    #[must_use]
    pub const fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::Infeasible => None,
        }
    }

    /// Whether a route was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
