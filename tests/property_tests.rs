#![allow(missing_docs)]

use std::collections::BTreeSet;

use linegraph::recognition::{
    has_first_structure, has_second_structure, has_third_structure, is_adjoint_graph,
    is_linear_graph, is_one_graph, transform_to_original_graph, StructureFlags,
};
use linegraph::Graph;
use proptest::prelude::*;

fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..=7).prop_flat_map(|n| {
        prop::collection::vec((1..=n, 1..=n), 0..24).prop_map(move |arcs| {
            let mut graph = Graph::new(n);
            for (from, to) in arcs {
                graph.add_edge(from, to).expect("arc in range");
            }
            graph
        })
    })
}

/// Graphs whose arcs are distinct and never stored in both directions.
fn arb_oriented_simple_graph() -> impl Strategy<Value = Graph> {
    (1usize..=7).prop_flat_map(|n| {
        prop::collection::vec((1..=n, 1..=n), 0..16).prop_map(move |pairs| {
            let mut graph = Graph::new(n);
            let mut seen = BTreeSet::new();
            for (a, b) in pairs {
                if a == b {
                    continue;
                }
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    graph.add_edge(a, b).expect("arc in range");
                }
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn linearity_is_conjunction_of_negated_structures(graph in arb_graph()) {
        let expected = !has_first_structure(&graph)
            && !has_second_structure(&graph)
            && !has_third_structure(&graph);
        prop_assert_eq!(is_linear_graph(&graph), expected);
        prop_assert_eq!(StructureFlags::detect(&graph).is_linear(), expected);
    }

    #[test]
    fn one_graph_iff_no_duplicate_neighbors(graph in arb_graph()) {
        let expected = graph.vertices().all(|v| {
            let neighbors = graph.neighbors(v);
            neighbors.len() == graph.neighbor_set(v).len()
        });
        prop_assert_eq!(is_one_graph(&graph), expected);
    }

    #[test]
    fn oriented_simple_graphs_transform_to_one_graphs(graph in arb_oriented_simple_graph()) {
        let original = transform_to_original_graph(&graph);
        prop_assert!(is_one_graph(&original));
        prop_assert_eq!(original.arc_count(), graph.arc_count() * 2);
    }

    #[test]
    fn parallel_arcs_survive_transformation(graph in arb_graph(), extra in 0usize..49) {
        let n = graph.num_vertices();
        let from = extra % n + 1;
        let to = (extra / n) % n + 1;
        let mut doubled = graph.clone();
        doubled.add_edge(from, to).unwrap();
        doubled.add_edge(from, to).unwrap();
        prop_assert!(!is_one_graph(&transform_to_original_graph(&doubled)));
    }

    #[test]
    fn transformation_never_mutates_input(graph in arb_graph()) {
        let before = graph.clone();
        let original = transform_to_original_graph(&graph);
        prop_assert_eq!(&graph, &before);
        prop_assert_eq!(original.num_vertices(), graph.num_vertices());
    }

    #[test]
    fn predicates_ignore_duplicate_arcs(graph in arb_graph()) {
        let mut deduped = Graph::new(graph.num_vertices());
        for v in graph.vertices() {
            for u in graph.neighbor_set(v) {
                deduped.add_edge(v, u).unwrap();
            }
        }
        prop_assert_eq!(is_adjoint_graph(&graph), is_adjoint_graph(&deduped));
        prop_assert_eq!(
            StructureFlags::detect(&graph),
            StructureFlags::detect(&deduped)
        );
    }
}
