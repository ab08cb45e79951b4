use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

use crate::storage::Graph;
use crate::types::{GraphError, VertexId};

/// Error type for reading the adjacency-list text format.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("could not open {path}: {source}")]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The input has no vertex-count line.
    #[error("missing vertex count")]
    MissingVertexCount,
    /// The vertex-count line is not an integer in `1..=MAX_VERTICES`.
    #[error("invalid number of vertices: {raw}")]
    InvalidVertexCount {
        /// Text found on the first line.
        raw: String,
    },
    /// A line names a vertex outside `1..=N` or not a number at all.
    #[error("line {line}: invalid vertex {value}")]
    InvalidVertex {
        /// One-based line number.
        line: usize,
        /// Offending token.
        value: String,
    },
    /// A neighbor token is outside `1..=N` or not a number at all.
    #[error("line {line}: invalid neighbor {value}")]
    InvalidNeighbor {
        /// One-based line number.
        line: usize,
        /// Offending token.
        value: String,
    },
    /// A non-blank line lacks the `<vertex>:` prefix.
    #[error("line {line}: expected '<vertex>: <neighbors>', found {content:?}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The whole line.
        content: String,
    },
    /// Store-level rejection.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Error type for writing graph files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be written.
    #[error("could not write {path}: {source}")]
    Write {
        /// Target file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Largest vertex count the loader accepts.
pub const MAX_VERTICES: i64 = 1 << 24;

/// Parses the adjacency-list text format.
///
/// The first non-blank line holds the vertex count `0 < N <= MAX_VERTICES`. Every following
/// non-blank line is `<vertex>: <neighbor> ...` with all ids in `1..=N`. Lines for
/// the same vertex accumulate and duplicate neighbors are kept. Any invalid token
/// rejects the whole input.
pub fn parse_graph(input: &str) -> Result<Graph, LoadError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(LoadError::MissingVertexCount)?;
    let invalid_count = || LoadError::InvalidVertexCount {
        raw: header.to_string(),
    };
    let num_vertices = match header.parse::<i64>() {
        Ok(count) if count > 0 && count <= MAX_VERTICES => count,
        _ => return Err(invalid_count()),
    };
    let mut graph = Graph::try_with_vertices(num_vertices).map_err(|_| invalid_count())?;

    for (line_no, line) in lines {
        let (vertex_raw, rest) = line.split_once(':').ok_or_else(|| LoadError::Malformed {
            line: line_no,
            content: line.to_string(),
        })?;
        let vertex = parse_vertex(&graph, vertex_raw.trim()).ok_or_else(|| {
            LoadError::InvalidVertex {
                line: line_no,
                value: vertex_raw.trim().to_string(),
            }
        })?;
        for token in rest.split_whitespace() {
            let neighbor =
                parse_vertex(&graph, token).ok_or_else(|| LoadError::InvalidNeighbor {
                    line: line_no,
                    value: token.to_string(),
                })?;
            graph.add_edge(vertex, neighbor)?;
        }
    }
    Ok(graph)
}

fn parse_vertex(graph: &Graph, token: &str) -> Option<VertexId> {
    token
        .parse::<VertexId>()
        .ok()
        .filter(|&vertex| graph.contains_vertex(vertex))
}

/// Renders the text format: the vertex count, then one line per vertex.
pub fn format_graph(graph: &Graph) -> String {
    format!("{}\n{graph}", graph.num_vertices())
}

/// Reads and parses a graph file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any parse error.
pub fn read_graph_file(path: &Path) -> Result<Graph, LoadError> {
    let result = fs::read_to_string(path)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|contents| parse_graph(&contents));
    match &result {
        Ok(graph) => info!(
            path = %path.display(),
            vertices = graph.num_vertices(),
            arcs = graph.arc_count(),
            "graph.load.completed"
        ),
        Err(err) => warn!(path = %path.display(), error = %err, "graph.load.failed"),
    }
    result
}

/// Writes `graph` in the text format, replacing any existing file.
pub fn write_graph_file(graph: &Graph, path: &Path) -> Result<(), ExportError> {
    fs::write(path, format_graph(graph)).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), vertices = graph.num_vertices(), "graph.write.completed");
    Ok(())
}

impl FromStr for Graph {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_graph(s)
    }
}

impl Graph {
    /// Replaces this graph with the contents of `path`.
    ///
    /// On failure the graph is left empty rather than partially populated.
    pub fn reload_from_file(&mut self, path: &Path) -> Result<(), LoadError> {
        self.clear();
        *self = read_graph_file(path)?;
        Ok(())
    }
}
