//! rc-graph: route constraint graph for routecolor.
//!
//! Provides:
//! - Membership views (routes per stop, stops per route)
//! - The constraint graph: routes as vertices, an edge wherever two routes share a stop
//! - An incremental builder and the one-shot `build_constraint_graph`
//! - Opt-in consistency checks for membership data
//!
//! # Example
//!
//! ```
//! use rc_graph::build_constraint_graph;
//!
//! let routes_for_stop = vec![vec![0], vec![0, 1], vec![2], vec![1], vec![1], vec![2, 3], vec![2], vec![3]];
//! let stops_for_route = vec![vec![0, 1], vec![3, 1, 4], vec![2, 5, 6], vec![5, 7]];
//! let graph = build_constraint_graph(&routes_for_stop, &stops_for_route);
//!
//! assert_eq!(graph.len(), 4);
//! assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod membership;
pub mod validate;

// Re-exports for ergonomics
pub use builder::{GraphBuilder, build_constraint_graph};
pub use error::{GraphError, GraphResult};
pub use graph::ConstraintGraph;
pub use membership::Membership;
pub use validate::validate_membership;
