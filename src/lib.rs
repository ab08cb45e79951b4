//! Structural line-graph recognition.
//!
//! Loads a graph from a simple adjacency-list text format, decides whether it is an
//! adjoint (line) graph through local predicates and forbidden-structure scans, and
//! reconstructs the candidate original graph.

#![warn(missing_docs)]

pub mod cli;
pub mod logging;
pub mod recognition;
pub mod storage;
pub mod types;

pub use storage::Graph;
pub use types::{GraphError, VertexId};
