#![forbid(unsafe_code)]

//! Structural line-graph recognition.
//!
//! Every function here is a pure read of a [`Graph`](crate::storage::Graph)
//! snapshot: nothing is cached between calls and the input is never mutated.

mod adjoint;
mod report;
mod structures;
mod transform;

/// Local predicates over neighbor sets and sequences.
///
/// `is_adjoint_graph` compares each vertex's neighbor set with its neighbors'
/// sets; `is_one_graph` checks for parallel arcs.
pub use adjoint::{is_adjoint_graph, is_one_graph};

/// Forbidden-structure detectors and the combined linearity test.
pub use structures::{
    has_first_structure, has_second_structure, has_third_structure, is_linear_graph,
    StructureFlags,
};

/// Adjoint-to-original reconstruction.
pub use transform::transform_to_original_graph;

/// Whole-pipeline verdicts.
pub use report::{analyze, Reconstruction, RecognitionReport};
