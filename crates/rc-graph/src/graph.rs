//! Core constraint graph structure.

use std::collections::BTreeSet;

use crate::error::GraphResult;
use crate::validate;

/// Undirected route adjacency: one vertex per route, an edge wherever two
/// routes share at least one stop.
///
/// Vertices are plain route indices `0..len()`. Each vertex keeps a sorted
/// neighbor set, so iteration order is deterministic and there are never
/// duplicate edges. The graph is symmetric and has no self-loops; every
/// constructor upholds this, and it is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "Vec<BTreeSet<usize>>",
        try_from = "Vec<BTreeSet<usize>>"
    )
)]
pub struct ConstraintGraph {
    pub(crate) adjacency: Vec<BTreeSet<usize>>,
}

impl ConstraintGraph {
    /// Wrap an existing adjacency table after checking that it is in range,
    /// loop-free, and symmetric.
    pub fn from_adjacency(adjacency: Vec<BTreeSet<usize>>) -> GraphResult<Self> {
        validate::validate_adjacency(&adjacency)?;
        Ok(Self { adjacency })
    }

    /// Number of vertices (routes).
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of a route.
    ///
    /// # Panics
    ///
    /// Panics if `route >= self.len()`.
    pub fn neighbors(&self, route: usize) -> &BTreeSet<usize> {
        &self.adjacency[route]
    }

    /// Number of neighbors of a route (panics if out of bounds).
    pub fn degree(&self, route: usize) -> usize {
        self.adjacency[route].len()
    }

    /// Whether two routes share a stop. Out-of-range routes have no edges.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Each undirected edge once, as `(lo, hi)` in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(lo, neighbors)| neighbors.range(lo + 1..).map(move |&hi| (lo, hi)))
    }

    /// Largest degree in the graph (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Iterate over `(route, neighbors)` in route order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> + '_ {
        self.adjacency.iter().enumerate()
    }

    /// Raw adjacency table, indexed by route.
    pub fn adjacency(&self) -> &[BTreeSet<usize>] {
        &self.adjacency
    }

    pub fn into_adjacency(self) -> Vec<BTreeSet<usize>> {
        self.adjacency
    }
}

impl From<ConstraintGraph> for Vec<BTreeSet<usize>> {
    fn from(graph: ConstraintGraph) -> Self {
        graph.adjacency
    }
}

impl TryFrom<Vec<BTreeSet<usize>>> for ConstraintGraph {
    type Error = crate::error::GraphError;

    fn try_from(adjacency: Vec<BTreeSet<usize>>) -> Result<Self, Self::Error> {
        Self::from_adjacency(adjacency)
    }
}
