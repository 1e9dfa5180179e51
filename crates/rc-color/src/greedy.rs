//! Greedy sequential coloring.

use rc_core::Color;
use rc_graph::ConstraintGraph;
use tracing::debug;

use crate::coloring::Coloring;
use crate::error::{ColorError, ColorResult};
use crate::ordering::VertexOrdering;

/// Configuration for greedy coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Order in which routes are colored.
    pub ordering: VertexOrdering,
}

/// Color `graph` visiting routes by decreasing degree.
///
/// Each route gets the smallest color none of its already-colored neighbors
/// uses. Routes are never revisited. The result is a proper coloring with
/// at most `graph.max_degree() + 1` colors.
pub fn color_graph(graph: &ConstraintGraph) -> Coloring {
    color_graph_with(graph, &GreedyConfig::default())
}

/// Color `graph` with an explicit configuration.
pub fn color_graph_with(graph: &ConstraintGraph, config: &GreedyConfig) -> Coloring {
    let order = config.ordering.order(graph);
    let coloring = greedy(graph, &order);
    debug!(
        routes = graph.len(),
        colors = coloring.num_colors(),
        max_degree = graph.max_degree(),
        ordering = ?config.ordering,
        "graph colored"
    );
    coloring
}

/// Color `graph` visiting routes in `order`.
///
/// `order` must name every route of `graph` exactly once.
pub fn color_in_order(graph: &ConstraintGraph, order: &[usize]) -> ColorResult<Coloring> {
    check_permutation(order, graph.len())?;
    Ok(greedy(graph, order))
}

fn check_permutation(order: &[usize], num_routes: usize) -> ColorResult<()> {
    if order.len() != num_routes {
        return Err(ColorError::OrderLength {
            len: order.len(),
            num_routes,
        });
    }

    let mut seen = vec![false; num_routes];
    for &route in order {
        let Some(slot) = seen.get_mut(route) else {
            return Err(ColorError::OrderRouteOutOfRange { route, num_routes });
        };
        if *slot {
            return Err(ColorError::DuplicateInOrder { route });
        }
        *slot = true;
    }

    Ok(())
}

/// Core loop. `order` must be a permutation of the graph's routes.
fn greedy(graph: &ConstraintGraph, order: &[usize]) -> Coloring {
    let mut assigned: Vec<Option<Color>> = vec![None; graph.len()];
    // taken[c] is set when a colored neighbor already uses color c.
    let mut taken: Vec<bool> = Vec::new();

    for &route in order {
        let neighbors = graph.neighbors(route);

        // d neighbors exclude at most d colors, so one of 0..=d is free.
        taken.clear();
        taken.resize(neighbors.len() + 1, false);
        for color in neighbors.iter().filter_map(|&n| assigned[n]) {
            if let Some(slot) = taken.get_mut(color.index() as usize) {
                *slot = true;
            }
        }

        let mut color = Color::FIRST;
        while taken[color.index() as usize] {
            color = color.next();
        }
        assigned[route] = Some(color);
    }

    assigned
        .into_iter()
        .map(|color| color.expect("every route appears in the visit order"))
        .collect()
}
