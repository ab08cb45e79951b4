use serde::Serialize;
use tracing::debug;

use crate::storage::Graph;

/// Outcome of running every forbidden-structure detector on one graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StructureFlags {
    /// Adjacent vertices of degree >= 2 sharing two or more neighbors.
    pub first: bool,
    /// A vertex of degree >= 2 with two mutually adjacent neighbors.
    pub second: bool,
    /// A vertex listing itself as a neighbor.
    pub third: bool,
}

impl StructureFlags {
    /// Runs all three detectors without short-circuiting.
    pub fn detect(graph: &Graph) -> Self {
        Self {
            first: has_first_structure(graph),
            second: has_second_structure(graph),
            third: has_third_structure(graph),
        }
    }

    /// True when none of the structures is present.
    pub fn is_linear(&self) -> bool {
        !self.first && !self.second && !self.third
    }
}

/// Whether the graph passes the structural line-graph test.
pub fn is_linear_graph(graph: &Graph) -> bool {
    !has_first_structure(graph) && !has_second_structure(graph) && !has_third_structure(graph)
}

/// Looks for an arc `v -> u` where both endpoints have at least two distinct
/// neighbors and at least two of those neighbors are shared.
pub fn has_first_structure(graph: &Graph) -> bool {
    for v in graph.vertices() {
        let v_neighbors = graph.neighbor_set(v);
        if v_neighbors.len() < 2 {
            continue;
        }
        for &u in graph.neighbors(v) {
            let u_neighbors = graph.neighbor_set(u);
            if u_neighbors.len() < 2 {
                continue;
            }
            if v_neighbors.intersection(&u_neighbors).nth(1).is_some() {
                debug!(v, u, "recognition.structure.first");
                return true;
            }
        }
    }
    false
}

/// Looks for a vertex with two distinct neighbors `u`, `w` where `w` is a neighbor of `u`.
pub fn has_second_structure(graph: &Graph) -> bool {
    for v in graph.vertices() {
        let v_neighbors = graph.neighbor_set(v);
        if v_neighbors.len() < 2 {
            continue;
        }
        for &u in &v_neighbors {
            let u_neighbors = graph.neighbor_set(u);
            if let Some(&w) = v_neighbors
                .iter()
                .find(|&&w| w != u && u_neighbors.contains(&w))
            {
                debug!(v, u, w, "recognition.structure.second");
                return true;
            }
        }
    }
    false
}

/// Looks for a self-loop.
pub fn has_third_structure(graph: &Graph) -> bool {
    graph.vertices().any(|v| graph.neighbors(v).contains(&v))
}
