use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::types::{GraphError, Result, VertexId};

/// Adjacency-list graph over vertex ids `1..=num_vertices`.
///
/// Neighbor sequences keep insertion order and duplicates; a repeated entry is a
/// parallel arc. Predicates that want undirected, multiplicity-free semantics go
/// through [`Graph::neighbor_set`], which never touches the stored sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    num_vertices: usize,
    adjacency: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Creates an edgeless graph with `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    /// Creates an edgeless graph from a signed vertex count.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] when `count` is negative or the
    /// adjacency table for `count` vertices cannot be allocated.
    pub fn try_with_vertices(count: i64) -> Result<Self> {
        let num_vertices = usize::try_from(count).map_err(|_| {
            GraphError::InvalidArgument(format!(
                "number of vertices cannot be negative (got {count})"
            ))
        })?;
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(num_vertices).map_err(|err| {
            GraphError::InvalidArgument(format!(
                "cannot allocate {num_vertices} vertices: {err}"
            ))
        })?;
        adjacency.resize_with(num_vertices, Vec::new);
        Ok(Self {
            num_vertices,
            adjacency,
        })
    }

    /// Number of vertices fixed at construction.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// True when `vertex` lies in `1..=num_vertices`.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        (1..=self.num_vertices).contains(&vertex)
    }

    /// Iterates vertex ids in ascending order.
    pub fn vertices(&self) -> RangeInclusive<VertexId> {
        1..=self.num_vertices
    }

    /// Appends `to` to the neighbor sequence of `from`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        for vertex in [from, to] {
            if !self.contains_vertex(vertex) {
                return Err(GraphError::OutOfRange {
                    vertex,
                    num_vertices: self.num_vertices,
                });
            }
        }
        self.adjacency[from - 1].push(to);
        Ok(())
    }

    /// Raw neighbor sequence of `vertex`; empty when out of range.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.slot(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct neighbors of `vertex`; empty when out of range.
    pub fn neighbor_set(&self, vertex: VertexId) -> BTreeSet<VertexId> {
        self.neighbors(vertex).iter().copied().collect()
    }

    /// Same as [`Graph::neighbor_set`].
    pub fn successors(&self, vertex: VertexId) -> BTreeSet<VertexId> {
        self.neighbor_set(vertex)
    }

    /// Whether `to` appears in the neighbor sequence of `from`.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.contains_vertex(to) && self.neighbors(from).contains(&to)
    }

    /// Every stored arc `(from, to)`, in storage order.
    pub fn arcs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices()
            .flat_map(move |from| self.neighbors(from).iter().map(move |&to| (from, to)))
    }

    /// Total number of stored arcs, counting duplicates.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Resets to the empty graph.
    pub fn clear(&mut self) {
        self.num_vertices = 0;
        self.adjacency.clear();
    }

    fn slot(&self, vertex: VertexId) -> Option<&Vec<VertexId>> {
        if self.contains_vertex(vertex) {
            self.adjacency.get(vertex - 1)
        } else {
            None
        }
    }
}

/// One `"<v>: <n1> <n2>"` line per vertex, without the vertex-count header.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            write!(f, "{vertex}:")?;
            for neighbor in self.neighbors(vertex) {
                write!(f, " {neighbor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
