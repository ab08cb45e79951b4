//! In-memory graph store.
//!
//! Holds the adjacency-list [`Graph`] that every recognition predicate and the
//! text loader operate on.

mod graph;

/// Adjacency-list graph with neighbor-query primitives.
pub use graph::Graph;
