//! Direct-edge and completed distance tables.
//!
//! [`EdgeMatrix`] records the sparse, undirected edges read from a puzzle and
//! grows one node at a time. [`EdgeMatrix::complete`] runs an all-pairs
//! shortest path relaxation and yields a dense [`DistanceMatrix`] in which
//! every pair is either a finite shortest distance or [`UNREACHABLE`].

use std::iter;

/// Edge weight and move count unit.
pub type Distance = u64;

/// Sentinel distance for pairs with no connecting path.
///
/// Chosen so that adding two sentinels cannot overflow and so that it
/// dominates any realistic move budget.
pub const UNREACHABLE: Distance = Distance::MAX / 4;

/// Largest edge weight or move budget the search represents exactly.
///
/// Any path summing past this is indistinguishable from [`UNREACHABLE`].
pub const MAX_DISTANCE: Distance = UNREACHABLE - 1;

/// Symmetric table of optional direct edge weights.
///
/// # Examples
/// ```
/// use petdet_core::EdgeMatrix;
///
/// let mut edges = EdgeMatrix::new();
/// let car = edges.grow();
/// let dog = edges.grow();
/// edges.connect(car, dog, 3);
/// assert_eq!(edges.direct(dog, car), Some(3));
/// assert_eq!(edges.direct(car, car), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeMatrix {
    size: usize,
    cells: Vec<Option<Distance>>,
}

impl EdgeMatrix {
    /// Construct an empty matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }

    /// Number of nodes covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Append a row and column without edges, returning the new node index.
    pub fn grow(&mut self) -> usize {
        let old = self.size;
        let new = old + 1;
        let mut cells = Vec::with_capacity(new * new);
        if old > 0 {
            for row in self.cells.chunks_exact(old) {
                cells.extend_from_slice(row);
                cells.push(None);
            }
        }
        cells.extend(iter::repeat_n(None, new));
        self.cells = cells;
        self.size = new;
        old
    }

    /// Record an undirected edge, replacing any earlier weight for the pair.
    ///
    /// Indices outside the matrix are ignored.
    pub fn connect(&mut self, from: usize, to: usize, distance: Distance) {
        for (row, col) in [(from, to), (to, from)] {
            if let Some(cell) = self
                .offset(row, col)
                .and_then(|offset| self.cells.get_mut(offset))
            {
                *cell = Some(distance);
            }
        }
    }

    /// Weight of the direct edge between two nodes, if one was recorded.
    #[must_use]
    pub fn direct(&self, from: usize, to: usize) -> Option<Distance> {
        self.offset(from, to)
            .and_then(|offset| self.cells.get(offset))
            .copied()
            .flatten()
    }

    /// Complete the matrix into all-pairs shortest distances.
    ///
    /// Missing off-diagonal edges start as [`UNREACHABLE`], the diagonal is
    /// zero, and every intermediate node `k` is relaxed in ascending order.
    /// Pairs in different components keep the sentinel.
    ///
    /// # Examples
    /// ```
    /// use petdet_core::{EdgeMatrix, UNREACHABLE};
    ///
    /// let mut edges = EdgeMatrix::new();
    /// let (a, b, c, d) = (edges.grow(), edges.grow(), edges.grow(), edges.grow());
    /// edges.connect(a, b, 3);
    /// edges.connect(b, c, 2);
    /// edges.connect(a, c, 100);
    /// let distances = edges.complete();
    /// assert_eq!(distances.get(a, c), Some(5));
    /// assert_eq!(distances.get(a, d), Some(UNREACHABLE));
    /// ```
    #[must_use]
    pub fn complete(&self) -> DistanceMatrix {
        let size = self.size;
        let mut cells: Vec<Distance> = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| {
                if row == col {
                    0
                } else {
                    self.direct(row, col).unwrap_or(UNREACHABLE)
                }
            })
            .collect();

        for via in 0..size {
            let pivot: Vec<Distance> = cells
                .get(via * size..(via + 1) * size)
                .map(<[Distance]>::to_vec)
                .unwrap_or_default();
            for row in cells.chunks_exact_mut(size) {
                let Some(&to_pivot) = row.get(via) else {
                    continue;
                };
                if to_pivot >= UNREACHABLE {
                    continue;
                }
                for (cell, &onward) in row.iter_mut().zip(&pivot) {
                    let through = to_pivot.saturating_add(onward);
                    if through < *cell {
                        *cell = through;
                    }
                }
            }
        }

        DistanceMatrix { size, cells }
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

/// Dense, symmetric table of shortest distances between every node pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Number of nodes covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Shortest distance between two nodes, or `None` for unknown indices.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<Distance> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.cells.get(from * self.size + to).copied()
    }

    /// Whether a path connects the two nodes.
    #[must_use]
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_some_and(|distance| distance < UNREACHABLE)
    }

    /// Distances from `from` to every node, indexed by destination.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[Distance]> {
        if from >= self.size {
            return None;
        }
        self.cells.get(from * self.size..(from + 1) * self.size)
    }
}
