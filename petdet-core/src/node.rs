//! Puzzle nodes and the naming conventions that decide their roles.
//!
//! A node's role is never stored in the input; it is derived from the node's
//! name using [`NamingRules`]. The defaults reproduce the classic puzzle
//! conventions: the vehicle is called `car` and every home ends in `_home`.

/// Name reserved for the vehicle unless configured otherwise.
pub const DEFAULT_VEHICLE_NAME: &str = "car";

/// Substring marking a home node unless configured otherwise.
pub const DEFAULT_HOME_MARKER: &str = "_home";

/// The part a node plays in the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// The unique starting node of the search.
    Vehicle,
    /// A node that is picked up and carried once visited.
    Pet,
    /// A node that accepts a carried pet whose name it contains.
    Home,
}

/// Conventions used to derive a [`NodeRole`] from a node name.
///
/// # Examples
/// ```
/// use petdet_core::{NamingRules, NodeRole};
///
/// let rules = NamingRules::default();
/// assert_eq!(rules.classify("car"), NodeRole::Vehicle);
/// assert_eq!(rules.classify("dog"), NodeRole::Pet);
/// assert_eq!(rules.classify("dog_home"), NodeRole::Home);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    vehicle_name: String,
    home_marker: String,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::new(DEFAULT_VEHICLE_NAME, DEFAULT_HOME_MARKER)
    }
}

impl NamingRules {
    /// Construct rules from an explicit vehicle name and home marker.
    ///
    /// An empty home marker disables home detection entirely rather than
    /// matching every name.
    pub fn new(vehicle_name: impl Into<String>, home_marker: impl Into<String>) -> Self {
        Self {
            vehicle_name: vehicle_name.into(),
            home_marker: home_marker.into(),
        }
    }

    /// Name of the vehicle node.
    #[must_use]
    pub fn vehicle_name(&self) -> &str {
        &self.vehicle_name
    }

    /// Substring identifying home nodes.
    #[must_use]
    pub fn home_marker(&self) -> &str {
        &self.home_marker
    }

    /// Derive the role of a node from its name.
    ///
    /// The home marker wins over the vehicle name, so `car_home` is a home
    /// even when the vehicle is called `car`.
    #[must_use]
    pub fn classify(&self, name: &str) -> NodeRole {
        if !self.home_marker.is_empty() && name.contains(self.home_marker.as_str()) {
            NodeRole::Home
        } else if name == self.vehicle_name {
            NodeRole::Vehicle
        } else {
            NodeRole::Pet
        }
    }
}

/// A named location in the puzzle graph.
///
/// Nodes live in a single arena owned by [`PuzzleGraph`](crate::PuzzleGraph)
/// and are addressed by their dense `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    index: usize,
    role: NodeRole,
}

impl Node {
    /// Construct a node with an explicit role.
    pub fn new(name: impl Into<String>, index: usize, role: NodeRole) -> Self {
        Self {
            name: name.into(),
            index,
            role,
        }
    }

    /// Node name as it appeared in the puzzle input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the node in first-seen order.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Role derived from the node name.
    #[must_use]
    pub const fn role(&self) -> NodeRole {
        self.role
    }

    /// Whether this node is a home that accepts `pet` as a drop-off.
    ///
    /// # Examples
    /// ```
    /// use petdet_core::{Node, NodeRole};
    ///
    /// let home = Node::new("dog_home", 2, NodeRole::Home);
    /// let dog = Node::new("dog", 1, NodeRole::Pet);
    /// let cat = Node::new("cat", 3, NodeRole::Pet);
    /// assert!(home.accepts(&dog));
    /// assert!(!home.accepts(&cat));
    /// ```
    #[must_use]
    pub fn accepts(&self, pet: &Self) -> bool {
        self.role == NodeRole::Home
            && pet.role == NodeRole::Pet
            && self.name.contains(pet.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("car", NodeRole::Vehicle)]
    #[case("dog", NodeRole::Pet)]
    #[case("dog_home", NodeRole::Home)]
    #[case("car_home", NodeRole::Home)]
    #[case("cart", NodeRole::Pet)]
    fn default_rules_classify_names(#[case] name: &str, #[case] expected: NodeRole) {
        assert_eq!(NamingRules::default().classify(name), expected);
    }

    #[rstest]
    fn custom_rules_change_vehicle_and_marker() {
        let rules = NamingRules::new("van", "-house");
        assert_eq!(rules.classify("van"), NodeRole::Vehicle);
        assert_eq!(rules.classify("car"), NodeRole::Pet);
        assert_eq!(rules.classify("cat-house"), NodeRole::Home);
        assert_eq!(rules.classify("cat_home"), NodeRole::Pet);
    }

    #[rstest]
    fn empty_marker_never_matches() {
        let rules = NamingRules::new("car", "");
        assert_eq!(rules.classify("dog_home"), NodeRole::Pet);
        assert_eq!(rules.classify("car"), NodeRole::Vehicle);
    }

    #[rstest]
    fn only_homes_accept_pets() {
        let dog = Node::new("dog", 1, NodeRole::Pet);
        let impostor = Node::new("dog_house", 2, NodeRole::Pet);
        let car = Node::new("car", 0, NodeRole::Vehicle);
        assert!(!impostor.accepts(&dog));
        assert!(!Node::new("dog_home", 3, NodeRole::Home).accepts(&car));
    }
}
