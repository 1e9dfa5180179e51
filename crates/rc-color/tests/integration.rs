//! Integration tests for rc-color.

use rc_color::{
    ColorError, Coloring, GreedyConfig, VertexOrdering, color_graph, color_graph_with,
    color_in_order, color_routes, degree_ordering,
};
use rc_core::Color;
use rc_graph::{GraphBuilder, Membership, build_constraint_graph};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn example_membership() -> Membership {
    Membership::new(
        vec![
            vec![0],
            vec![0, 1],
            vec![2],
            vec![1],
            vec![1],
            vec![2, 3],
            vec![2],
            vec![3],
        ],
        vec![vec![0, 1], vec![3, 1, 4], vec![2, 5, 6], vec![5, 7]],
    )
}

#[test]
fn example_network_coloring() {
    init_tracing();
    let membership = example_membership();
    let graph = build_constraint_graph(membership.routes_for_stop(), membership.stops_for_route());
    let coloring = color_graph(&graph);

    // One color per route
    assert_eq!(coloring.len(), membership.num_routes());

    // Neighbors differ
    assert_ne!(coloring.color(0), coloring.color(1));
    assert_ne!(coloring.color(2), coloring.color(3));

    assert_eq!(coloring.as_indices(), vec![0, 1, 0, 1]);
    assert_eq!(coloring.classes(), vec![vec![0, 2], vec![1, 3]]);
}

#[test]
fn pipeline_returns_graph_and_coloring() {
    init_tracing();
    let result = color_routes(&example_membership());

    assert_eq!(result.graph.edges().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    assert_eq!(result.num_colors(), 2);
    assert_eq!(result.color_of(3), Some(Color::new(1)));
    assert_eq!(result.color_of(4), None);
    assert!(result.coloring.verify(&result.graph).is_ok());
}

#[test]
fn three_routes_through_one_stop() {
    let membership =
        Membership::from_stops_for_route(4, vec![vec![0, 3], vec![1, 3], vec![3, 2]]).unwrap();
    let result = color_routes(&membership);

    let mut colors = result.coloring.as_indices();
    colors.sort_unstable();
    assert_eq!(colors, vec![0, 1, 2]);
}

#[test]
fn empty_network() {
    let result = color_routes(&Membership::default());
    assert!(result.graph.is_empty());
    assert!(result.coloring.is_empty());
    assert_eq!(result.num_colors(), 0);
}

#[test]
fn isolated_route_gets_color_zero() {
    let membership =
        Membership::from_stops_for_route(6, vec![vec![0, 1], vec![1, 2], vec![4, 5]]).unwrap();
    let result = color_routes(&membership);

    assert!(result.graph.neighbors(2).is_empty());
    assert_eq!(result.color_of(2), Some(Color::FIRST));
}

#[test]
fn odd_cycle_needs_three_colors() {
    // Five routes in a ring, each sharing one stop with the next.
    let stops_for_route: Vec<Vec<usize>> = (0..5).map(|r| vec![r, (r + 1) % 5]).collect();
    let membership = Membership::from_stops_for_route(5, stops_for_route).unwrap();
    let result = color_routes(&membership);

    assert_eq!(result.graph.edge_count(), 5);
    assert_eq!(result.num_colors(), 3);
    assert!(result.coloring.verify(&result.graph).is_ok());
}

#[test]
fn degree_ordering_drives_default_coloring() {
    init_tracing();
    // Route 4 meets every other route; routes 0..4 form a path.
    let mut builder = GraphBuilder::with_routes(5);
    builder
        .add_stop([0, 1, 4])
        .add_stop([1, 2, 4])
        .add_stop([2, 3, 4]);
    let graph = builder.build();

    let order = degree_ordering(&graph);
    assert_eq!(order[0], 4);

    let by_default = color_graph(&graph);
    let by_order = color_in_order(&graph, &order).unwrap();
    assert_eq!(by_default, by_order);
    assert_eq!(by_default.color(4), Color::FIRST);

    let by_index = color_graph_with(
        &graph,
        &GreedyConfig {
            ordering: VertexOrdering::Index,
        },
    );
    assert!(by_index.verify(&graph).is_ok());
}

#[test]
fn tampered_coloring_is_rejected() {
    let result = color_routes(&example_membership());
    let mut colors: Vec<Color> = result.coloring.clone().into();
    colors[1] = colors[0];
    let tampered = Coloring::new(colors);

    assert_eq!(
        tampered.verify(&result.graph),
        Err(ColorError::Conflict {
            a: 0,
            b: 1,
            color: Color::FIRST
        })
    );
}

#[test]
fn dense_network_stays_proper() {
    // 40 routes on 30 stops, each route visiting a strided set of stops.
    let stops_for_route: Vec<Vec<usize>> = (0..40)
        .map(|r| (0..4).map(|k| (r * 7 + k * 11) % 30).collect())
        .collect();
    let membership = Membership::from_stops_for_route(30, stops_for_route).unwrap();
    assert!(membership.validate().is_ok());

    let result = color_routes(&membership);
    assert_eq!(result.coloring.len(), 40);
    assert!(result.coloring.verify(&result.graph).is_ok());
    assert!(result.num_colors() <= result.graph.max_degree() + 1);
}

#[cfg(feature = "serde")]
#[test]
fn route_coloring_serializes() {
    let result = color_routes(&example_membership());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["graph"], serde_json::json!([[1], [0], [3], [2]]));
    assert_eq!(json["coloring"], serde_json::json!([0, 1, 0, 1]));
}
