use serde::Serialize;
use tracing::info;

use crate::storage::Graph;

use super::adjoint::{is_adjoint_graph, is_one_graph};
use super::structures::StructureFlags;
use super::transform::transform_to_original_graph;

/// Verdicts for the reconstructed original graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reconstruction {
    /// Candidate original graph produced from the input.
    pub graph: Graph,
    /// Whether the candidate has no parallel arcs.
    pub one_graph: bool,
}

impl Reconstruction {
    /// The input counts as a line graph of a simple graph when the candidate is a one-graph.
    pub fn confirms_line_graph(&self) -> bool {
        self.one_graph
    }
}

/// Everything the recognition pipeline decides about one input graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecognitionReport {
    /// Vertex count of the input.
    pub num_vertices: usize,
    /// Stored arc count of the input, duplicates included.
    pub num_arcs: usize,
    /// Whether the input passes the adjoint-graph test.
    pub adjoint: bool,
    /// Whether no forbidden structure occurs in the input.
    pub linear: bool,
    /// Individual forbidden-structure flags.
    pub structures: StructureFlags,
    /// Present only for adjoint inputs.
    pub reconstruction: Option<Reconstruction>,
}

/// Runs the full pipeline: adjoint test, structure scan and, for adjoint inputs,
/// reconstruction followed by the one-graph check.
pub fn analyze(graph: &Graph) -> RecognitionReport {
    let adjoint = is_adjoint_graph(graph);
    let structures = StructureFlags::detect(graph);
    let reconstruction = adjoint.then(|| {
        let original = transform_to_original_graph(graph);
        let one_graph = is_one_graph(&original);
        Reconstruction {
            graph: original,
            one_graph,
        }
    });
    let report = RecognitionReport {
        num_vertices: graph.num_vertices(),
        num_arcs: graph.arc_count(),
        adjoint,
        linear: structures.is_linear(),
        structures,
        reconstruction,
    };
    info!(
        vertices = report.num_vertices,
        arcs = report.num_arcs,
        adjoint = report.adjoint,
        linear = report.linear,
        first = report.structures.first,
        second = report.structures.second,
        third = report.structures.third,
        one_graph = report.reconstruction.as_ref().map(|r| r.one_graph),
        "recognition.analyze.completed"
    );
    report
}
