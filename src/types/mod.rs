#![forbid(unsafe_code)]

//! Shared identifiers and the store-level error type.

/// One-based vertex identifier. Valid ids for a graph with `N` vertices are `1..=N`.
pub type VertexId = usize;

/// Errors raised by the graph store itself.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A constructor or accessor received an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An edge endpoint fell outside `1..=num_vertices`.
    #[error("vertex {vertex} out of range 1..={num_vertices}")]
    OutOfRange {
        /// The offending endpoint.
        vertex: VertexId,
        /// Vertex count of the graph the insert targeted.
        num_vertices: usize,
    },
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, GraphError>;
