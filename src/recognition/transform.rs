use tracing::debug;

use crate::storage::Graph;

/// Builds the candidate original graph of an adjoint graph.
///
/// Every stored arc `v -> u` contributes both `v -> u` and `u -> v` to the result,
/// in storage order and without deduplication. An input that already stores both
/// directions of an edge therefore yields a doubled pair, which [`is_one_graph`]
/// reports as a parallel arc.
///
/// [`is_one_graph`]: crate::recognition::is_one_graph
pub fn transform_to_original_graph(adjoint: &Graph) -> Graph {
    let mut original = Graph::new(adjoint.num_vertices());
    for (v, u) in adjoint.arcs() {
        // Arcs come from a graph with the same vertex range.
        let inserted = original
            .add_edge(v, u)
            .and_then(|()| original.add_edge(u, v));
        debug_assert!(inserted.is_ok(), "arc {v}->{u} outside 1..={}", adjoint.num_vertices());
    }
    debug!(
        vertices = original.num_vertices(),
        adjoint_arcs = adjoint.arc_count(),
        original_arcs = original.arc_count(),
        "recognition.transform.completed"
    );
    original
}
