//! End-to-end coloring of a route network.

use rc_core::Color;
use rc_graph::{ConstraintGraph, Membership};
use tracing::info;

use crate::coloring::Coloring;
use crate::greedy::{GreedyConfig, color_graph_with};

/// A route network's constraint graph together with its coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteColoring {
    pub graph: ConstraintGraph,
    pub coloring: Coloring,
}

impl RouteColoring {
    /// Color of a route (returns None if out of bounds).
    pub fn color_of(&self, route: usize) -> Option<Color> {
        self.coloring.get(route)
    }

    pub fn num_colors(&self) -> usize {
        self.coloring.num_colors()
    }
}

/// Build the constraint graph for `membership` and color it.
///
/// # Panics
///
/// Panics on out-of-range membership indices; see [`Membership::validate`].
pub fn color_routes(membership: &Membership) -> RouteColoring {
    color_routes_with(membership, &GreedyConfig::default())
}

pub fn color_routes_with(membership: &Membership, config: &GreedyConfig) -> RouteColoring {
    let graph = membership.build_graph();
    info!(
        routes = graph.len(),
        stops = membership.num_stops(),
        edges = graph.edge_count(),
        "constraint graph built"
    );

    let coloring = color_graph_with(&graph, config);
    info!(
        routes = coloring.len(),
        colors = coloring.num_colors(),
        "graph colored"
    );

    RouteColoring { graph, coloring }
}
