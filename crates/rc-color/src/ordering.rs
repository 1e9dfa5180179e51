//! Vertex visit orders for greedy coloring.

use std::cmp::Reverse;

use rc_graph::ConstraintGraph;

/// Order in which the greedy colorer visits routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexOrdering {
    /// Highest degree first, ties by ascending route index.
    #[default]
    LargestDegreeFirst,
    /// Ascending route index.
    Index,
}

impl VertexOrdering {
    /// Visit order for `graph`: a permutation of `0..graph.len()`.
    pub fn order(self, graph: &ConstraintGraph) -> Vec<usize> {
        match self {
            VertexOrdering::LargestDegreeFirst => degree_ordering(graph),
            VertexOrdering::Index => (0..graph.len()).collect(),
        }
    }
}

/// Routes sorted by decreasing degree.
///
/// Heavily constrained routes come first, while most colors are still free.
/// The sort is stable, so routes of equal degree keep ascending index order.
pub fn degree_ordering(graph: &ConstraintGraph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.len()).collect();
    order.sort_by_key(|&route| Reverse(graph.degree(route)));
    order
}
