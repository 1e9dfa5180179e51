//! Constraint graph construction.

use std::collections::BTreeSet;
use std::iter;

use tracing::debug;

use crate::graph::ConstraintGraph;

/// Builder for constructing a constraint graph incrementally.
///
/// Start from a fixed number of isolated routes, join routes with
/// `add_stop` or `add_edge`, then call `build()` to freeze the result into
/// an immutable `ConstraintGraph`.
///
/// Route indices are not checked: passing an index `>= num_routes()` panics.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    adjacency: Vec<BTreeSet<usize>>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with `num_routes` isolated routes.
    pub fn with_routes(num_routes: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); num_routes],
        }
    }

    /// Append an isolated route and return its index.
    pub fn add_route(&mut self) -> usize {
        self.adjacency.push(BTreeSet::new());
        self.adjacency.len() - 1
    }

    pub fn num_routes(&self) -> usize {
        self.adjacency.len()
    }

    /// Join two routes. Joining a route to itself is a no-op.
    pub fn add_edge(&mut self, a: usize, b: usize) -> &mut Self {
        if a != b {
            self.adjacency[a].insert(b);
            self.adjacency[b].insert(a);
        }
        self
    }

    /// Join every pair of distinct routes serving one stop.
    ///
    /// Repeated routes are harmless: they never produce a self-loop or a
    /// duplicate edge.
    pub fn add_stop<I>(&mut self, routes: I) -> &mut Self
    where
        I: IntoIterator<Item = usize>,
    {
        let routes: Vec<usize> = routes.into_iter().collect();
        for (i, &a) in routes.iter().enumerate() {
            for &b in &routes[i + 1..] {
                self.add_edge(a, b);
            }
        }
        self
    }

    /// Freeze into an immutable graph.
    pub fn build(self) -> ConstraintGraph {
        ConstraintGraph {
            adjacency: self.adjacency,
        }
    }
}

/// Build the constraint graph for a route network.
///
/// `routes_for_stop[s]` lists the routes serving stop `s`;
/// `stops_for_route[r]` lists the stops on route `r`. The graph has exactly
/// `stops_for_route.len()` vertices, and routes `a != b` are adjacent iff
/// some stop is served by both.
///
/// Each stop is expanded once, by the first route that reaches it; that
/// expansion joins every route at the stop, so later visits add nothing and
/// are skipped. This relies on the two views agreeing. Use
/// [`validate_membership`](crate::validate_membership) beforehand when they
/// might not.
///
/// # Panics
///
/// Panics if a stop index is `>= routes_for_stop.len()` or a route index is
/// `>= stops_for_route.len()`.
pub fn build_constraint_graph<R, S>(routes_for_stop: &[R], stops_for_route: &[S]) -> ConstraintGraph
where
    for<'a> &'a R: IntoIterator<Item = &'a usize>,
    for<'a> &'a S: IntoIterator<Item = &'a usize>,
{
    let mut builder = GraphBuilder::with_routes(stops_for_route.len());
    let mut visited_stop = vec![false; routes_for_stop.len()];
    let mut skipped_stops = 0_usize;

    for (route, stops) in stops_for_route.iter().enumerate() {
        for &stop in stops {
            if visited_stop[stop] {
                skipped_stops += 1;
                continue;
            }
            let others = &routes_for_stop[stop];
            builder.add_stop(others.into_iter().copied().chain(iter::once(route)));
            visited_stop[stop] = true;
        }
    }

    let graph = builder.build();
    debug!(
        routes = graph.len(),
        stops = routes_for_stop.len(),
        edges = graph.edge_count(),
        skipped_stops,
        "constraint graph built"
    );
    graph
}
