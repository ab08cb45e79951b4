use std::fs;
use std::path::Path;

use tracing::info;

use crate::storage::Graph;

use super::import_export::ExportError;

/// Undirected Graphviz description of `graph`.
///
/// Each stored arc `(i, n)` is emitted once when `i < n`, so symmetric pairs collapse
/// into a single edge. One-directional arcs from the larger id, self-loops and
/// duplicate arcs are not fully represented.
pub fn to_dot(graph: &Graph) -> String {
    let edges: String = graph
        .arcs()
        .filter(|(from, to)| from < to)
        .map(|(from, to)| format!("    {from} -- {to};\n"))
        .collect();
    format!("graph G {{\n{edges}}}\n")
}

/// Writes [`to_dot`] output to `path`.
pub fn write_dot_file(graph: &Graph, path: &Path) -> Result<(), ExportError> {
    fs::write(path, to_dot(graph)).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "graph.dot.written");
    Ok(())
}
