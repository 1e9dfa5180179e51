//! Membership and adjacency consistency checks.
//!
//! `build_constraint_graph` never calls these; it trusts its input. Callers
//! that load membership data from an untrusted source run
//! [`validate_membership`] first.

use std::collections::{BTreeSet, HashSet};

use crate::error::{GraphError, GraphResult};

/// Check that both membership views are in range and mirror each other.
///
/// Checks run in a fixed order so the first reported error is stable:
/// stop ranges, route ranges, then the route→stop and stop→route
/// directions of the relation.
pub fn validate_membership<R, S>(routes_for_stop: &[R], stops_for_route: &[S]) -> GraphResult<()>
where
    for<'a> &'a R: IntoIterator<Item = &'a usize>,
    for<'a> &'a S: IntoIterator<Item = &'a usize>,
{
    let num_stops = routes_for_stop.len();
    let num_routes = stops_for_route.len();

    let mut on_route: HashSet<(usize, usize)> = HashSet::new();
    for (route, stops) in stops_for_route.iter().enumerate() {
        for &stop in stops {
            if stop >= num_stops {
                return Err(GraphError::StopOutOfRange {
                    route,
                    stop,
                    num_stops,
                });
            }
            on_route.insert((route, stop));
        }
    }

    let mut at_stop: HashSet<(usize, usize)> = HashSet::new();
    for (stop, routes) in routes_for_stop.iter().enumerate() {
        for &route in routes {
            if route >= num_routes {
                return Err(GraphError::RouteOutOfRange {
                    stop,
                    route,
                    num_routes,
                });
            }
            at_stop.insert((route, stop));
        }
    }

    for (route, stops) in stops_for_route.iter().enumerate() {
        for &stop in stops {
            if !at_stop.contains(&(route, stop)) {
                return Err(GraphError::MissingRouteAtStop { route, stop });
            }
        }
    }

    for (stop, routes) in routes_for_stop.iter().enumerate() {
        for &route in routes {
            if !on_route.contains(&(route, stop)) {
                return Err(GraphError::MissingStopOnRoute { stop, route });
            }
        }
    }

    Ok(())
}

/// Check that an adjacency table describes a simple undirected graph.
pub(crate) fn validate_adjacency(adjacency: &[BTreeSet<usize>]) -> GraphResult<()> {
    let num_routes = adjacency.len();

    for (route, neighbors) in adjacency.iter().enumerate() {
        for &neighbor in neighbors {
            if neighbor >= num_routes {
                return Err(GraphError::NeighborOutOfRange {
                    route,
                    neighbor,
                    num_routes,
                });
            }
            if neighbor == route {
                return Err(GraphError::SelfLoop { route });
            }
            if !adjacency[neighbor].contains(&route) {
                return Err(GraphError::AsymmetricEdge {
                    from: route,
                    to: neighbor,
                });
            }
        }
    }

    Ok(())
}
