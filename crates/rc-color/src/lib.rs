//! Greedy route coloring.
//!
//! Assigns each route in a [`ConstraintGraph`](rc_graph::ConstraintGraph) the
//! smallest color not already used by a neighbor, visiting the most
//! constrained routes (highest degree) first. The result is always a proper
//! coloring, though not necessarily one with the fewest colors.
//!
//! ```
//! use rc_color::color_graph;
//! use rc_graph::build_constraint_graph;
//!
//! let routes_for_stop = vec![vec![0], vec![0, 1], vec![2], vec![1], vec![1], vec![2, 3], vec![2], vec![3]];
//! let stops_for_route = vec![vec![0, 1], vec![3, 1, 4], vec![2, 5, 6], vec![5, 7]];
//! let graph = build_constraint_graph(&routes_for_stop, &stops_for_route);
//! let coloring = color_graph(&graph);
//!
//! assert_eq!(coloring.as_indices(), vec![0, 1, 0, 1]);
//! assert!(coloring.verify(&graph).is_ok());
//! ```

pub mod coloring;
pub mod error;
pub mod greedy;
pub mod ordering;
pub mod pipeline;

pub use coloring::Coloring;
pub use error::{ColorError, ColorResult};
pub use greedy::{GreedyConfig, color_graph, color_graph_with, color_in_order};
pub use ordering::{VertexOrdering, degree_ordering};
pub use pipeline::{RouteColoring, color_routes, color_routes_with};
