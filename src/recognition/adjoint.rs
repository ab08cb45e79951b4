use std::collections::BTreeSet;

use tracing::debug;

use crate::storage::Graph;

/// Whether every vertex shares its exact neighbor set with each of its neighbors.
///
/// Neighbors are taken from the stored sequences, so an arc `v -> u` is checked
/// even when `u -> v` is absent. An edgeless graph is vacuously adjoint.
pub fn is_adjoint_graph(graph: &Graph) -> bool {
    for v in graph.vertices() {
        let v_neighbors = graph.neighbor_set(v);
        for &u in graph.neighbors(v) {
            if graph.neighbor_set(u) != v_neighbors {
                debug!(v, u, "recognition.adjoint.mismatch");
                return false;
            }
        }
    }
    true
}

/// Whether no vertex stores the same neighbor twice.
pub fn is_one_graph(graph: &Graph) -> bool {
    graph.vertices().all(|v| {
        let neighbors = graph.neighbors(v);
        let distinct: BTreeSet<_> = neighbors.iter().collect();
        if distinct.len() != neighbors.len() {
            debug!(vertex = v, "recognition.one_graph.parallel_arc");
            return false;
        }
        true
    })
}
