//! Per-node visiting preference derived from completed distances.

use crate::{Distance, DistanceMatrix};

/// For every node, all node indices ordered by ascending distance.
///
/// Ties resolve to the lower index. Each list contains the node itself at
/// distance zero, normally first, so callers walking the list must skip it.
///
/// # Examples
/// ```
/// use petdet_core::{EdgeMatrix, NeighbourOrder};
///
/// let mut edges = EdgeMatrix::new();
/// let (car, dog, home) = (edges.grow(), edges.grow(), edges.grow());
/// edges.connect(car, dog, 3);
/// edges.connect(dog, home, 2);
/// let order = NeighbourOrder::from_distances(&edges.complete());
/// assert_eq!(order.of(dog), &[dog, home, car]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighbourOrder {
    size: usize,
    order: Vec<usize>,
}

impl NeighbourOrder {
    /// Rank every node's neighbours by selection over its distance row.
    ///
    /// Candidates are scanned in ascending index order and only a strictly
    /// smaller distance displaces the current pick.
    #[must_use]
    pub fn from_distances(distances: &DistanceMatrix) -> Self {
        let size = distances.len();
        let mut order = Vec::with_capacity(size * size);
        for from in 0..size {
            let row = distances.row(from).unwrap_or_default();
            let mut picked = vec![false; row.len()];
            while let Some(next) = nearest_unpicked(row, &picked) {
                if let Some(flag) = picked.get_mut(next) {
                    *flag = true;
                }
                order.push(next);
            }
        }
        Self { size, order }
    }

    /// Number of nodes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether no nodes are covered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Ordered node indices for `node`, or an empty slice for unknown nodes.
    #[must_use]
    pub fn of(&self, node: usize) -> &[usize] {
        if node >= self.size {
            return &[];
        }
        self.order
            .get(node * self.size..(node + 1) * self.size)
            .unwrap_or_default()
    }
}

fn nearest_unpicked(row: &[Distance], picked: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, Distance)> = None;
    for (candidate, (&distance, &taken)) in row.iter().zip(picked).enumerate() {
        if taken {
            continue;
        }
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(candidate, _)| candidate)
}
