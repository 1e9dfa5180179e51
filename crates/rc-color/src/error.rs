//! Error types for coloring operations.

use rc_core::{Color, RcError};
use thiserror::Error;

/// Result type for coloring operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors that can occur when coloring with a caller-supplied order or
/// checking a coloring against a graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Visit order doesn't cover every route exactly once.
    #[error("Visit order has {len} entries, but the graph has {num_routes} routes")]
    OrderLength { len: usize, num_routes: usize },

    #[error("Visit order names route {route}, but the graph has {num_routes} routes")]
    OrderRouteOutOfRange { route: usize, num_routes: usize },

    #[error("Visit order names route {route} more than once")]
    DuplicateInOrder { route: usize },

    /// Coloring and graph disagree on the number of routes.
    #[error("Coloring has {colors} entries, but the graph has {num_routes} routes")]
    LengthMismatch { colors: usize, num_routes: usize },

    /// Two routes sharing a stop got the same color.
    #[error("Routes {a} and {b} share a stop but both have color {color}")]
    Conflict { a: usize, b: usize, color: Color },
}

impl From<ColorError> for RcError {
    fn from(err: ColorError) -> Self {
        match err {
            ColorError::OrderRouteOutOfRange { route, num_routes } => RcError::IndexOob {
                what: "route in visit order",
                index: route,
                len: num_routes,
            },
            conflict @ ColorError::Conflict { .. } => RcError::Invariant {
                what: conflict.to_string(),
            },
            other => RcError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
