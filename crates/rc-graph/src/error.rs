//! Graph-specific error types.

use rc_core::RcError;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Membership and adjacency consistency errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A route lists a stop index past the end of the stop table.
    #[error("Route {route} lists stop {stop}, but only {num_stops} stops exist")]
    StopOutOfRange {
        route: usize,
        stop: usize,
        num_stops: usize,
    },

    /// A stop lists a route index past the end of the route table.
    #[error("Stop {stop} lists route {route}, but only {num_routes} routes exist")]
    RouteOutOfRange {
        stop: usize,
        route: usize,
        num_routes: usize,
    },

    /// A route lists a stop that doesn't list the route back.
    #[error("Route {route} lists stop {stop}, but stop {stop} doesn't list route {route}")]
    MissingRouteAtStop { route: usize, stop: usize },

    /// A stop lists a route that doesn't list the stop back.
    #[error("Stop {stop} lists route {route}, but route {route} doesn't list stop {stop}")]
    MissingStopOnRoute { stop: usize, route: usize },

    /// An adjacency entry points past the last route.
    #[error("Route {route} has neighbor {neighbor}, but only {num_routes} routes exist")]
    NeighborOutOfRange {
        route: usize,
        neighbor: usize,
        num_routes: usize,
    },

    /// A route is listed as its own neighbor.
    #[error("Route {route} is adjacent to itself")]
    SelfLoop { route: usize },

    /// An edge is present in one direction only.
    #[error("Route {from} lists neighbor {to}, but route {to} doesn't list {from}")]
    AsymmetricEdge { from: usize, to: usize },
}

impl From<GraphError> for RcError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::StopOutOfRange {
                stop, num_stops, ..
            } => RcError::IndexOob {
                what: "stop",
                index: stop,
                len: num_stops,
            },
            GraphError::RouteOutOfRange {
                route, num_routes, ..
            } => RcError::IndexOob {
                what: "route",
                index: route,
                len: num_routes,
            },
            GraphError::NeighborOutOfRange {
                neighbor,
                num_routes,
                ..
            } => RcError::IndexOob {
                what: "neighbor",
                index: neighbor,
                len: num_routes,
            },
            other => RcError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
