//! Stop/route membership: the two views of which routes serve which stops.

use crate::builder::build_constraint_graph;
use crate::error::{GraphError, GraphResult};
use crate::graph::ConstraintGraph;
use crate::validate::validate_membership;

/// Owned membership data for a route network.
///
/// Holds `routes_for_stop` (indexed by stop) and `stops_for_route` (indexed
/// by route, in travel order). The two views are expected to mirror each
/// other; `new` takes them as given, `validate` checks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Membership {
    routes_for_stop: Vec<Vec<usize>>,
    stops_for_route: Vec<Vec<usize>>,
}

impl Membership {
    pub fn new(routes_for_stop: Vec<Vec<usize>>, stops_for_route: Vec<Vec<usize>>) -> Self {
        Self {
            routes_for_stop,
            stops_for_route,
        }
    }

    /// Derive the per-stop view from stop sequences.
    ///
    /// Each stop lists every route visiting it exactly once, in ascending
    /// route order, even if a route passes the stop several times.
    pub fn from_stops_for_route(
        num_stops: usize,
        stops_for_route: Vec<Vec<usize>>,
    ) -> GraphResult<Self> {
        let mut routes_for_stop: Vec<Vec<usize>> = vec![Vec::new(); num_stops];

        for (route, stops) in stops_for_route.iter().enumerate() {
            for &stop in stops {
                let routes = routes_for_stop.get_mut(stop).ok_or(GraphError::StopOutOfRange {
                    route,
                    stop,
                    num_stops,
                })?;
                // Routes are visited in order, so a repeat can only be the last entry.
                if routes.last() != Some(&route) {
                    routes.push(route);
                }
            }
        }

        Ok(Self {
            routes_for_stop,
            stops_for_route,
        })
    }

    pub fn num_stops(&self) -> usize {
        self.routes_for_stop.len()
    }

    pub fn num_routes(&self) -> usize {
        self.stops_for_route.len()
    }

    pub fn routes_for_stop(&self) -> &[Vec<usize>] {
        &self.routes_for_stop
    }

    pub fn stops_for_route(&self) -> &[Vec<usize>] {
        &self.stops_for_route
    }

    /// Routes serving a stop (empty if the stop doesn't exist).
    pub fn routes_at(&self, stop: usize) -> &[usize] {
        self.routes_for_stop.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stops on a route in travel order (empty if the route doesn't exist).
    pub fn stops_on(&self, route: usize) -> &[usize] {
        self.stops_for_route.get(route).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that both views are in range and mirror each other.
    pub fn validate(&self) -> GraphResult<()> {
        validate_membership(&self.routes_for_stop, &self.stops_for_route)
    }

    /// Build the constraint graph for this network.
    ///
    /// # Panics
    ///
    /// Panics on out-of-range indices; run `validate` first for untrusted data.
    pub fn build_graph(&self) -> ConstraintGraph {
        build_constraint_graph(&self.routes_for_stop, &self.stops_for_route)
    }
}
