// tests/properties.rs

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use gatedag::dag::{Readiness, Topology, longest_path};
use gatedag::document::GraphDocument;
use gatedag::types::SourcePolicy;
use gatedag_test_utils::builders::GraphDocumentBuilder;

/// A random DAG plus a random completed set.
///
/// Acyclicity comes from only allowing edges `node_i -> node_j` with `i < j`;
/// node names are shuffled relative to that order so identifier tie-breaking
/// does not line up with edge direction.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = (GraphDocument, BTreeSet<String>)> {
    (1..=max_nodes).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n), 0..(n * 2));
        let or_gates = proptest::collection::vec(any::<bool>(), n);
        let done = proptest::collection::vec(any::<bool>(), n);
        let names = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();

        (edges, or_gates, done, names).prop_map(move |(edges, or_gates, done, names)| {
            let name = |i: usize| format!("t{:02}", names[i]);

            let mut builder = GraphDocumentBuilder::new();
            for i in 0..n {
                builder = builder.node(&name(i));
                if or_gates[i] {
                    builder = builder.or_gate(&name(i));
                }
            }
            for (a, b) in edges {
                if a < b {
                    builder = builder.edge(&name(a), &name(b));
                }
            }

            let done_set: BTreeSet<String> = (0..n).filter(|&i| done[i]).map(name).collect();
            (builder.build(), done_set)
        })
    })
}

proptest! {
    #[test]
    fn order_is_a_linearization((doc, _done) in dag_strategy(12)) {
        let graph = doc.graph();
        let topo = Topology::compute(graph).unwrap();
        let pos = topo.positions();

        prop_assert_eq!(topo.order.len(), graph.len());
        for id in graph.nodes() {
            for succ in graph.successors(id) {
                prop_assert!(pos[id] < pos[succ], "{} must precede {}", id, succ);
            }
        }
    }

    #[test]
    fn sources_and_sinks_match_degrees((doc, _done) in dag_strategy(12)) {
        let graph = doc.graph();
        let topo = Topology::compute(graph).unwrap();

        for s in &topo.sources {
            prop_assert!(graph.predecessors(s).is_empty());
        }
        for s in &topo.sinks {
            prop_assert!(graph.successors(s).is_empty());
        }
        let sources: HashSet<&String> = topo.sources.iter().collect();
        let sinks: HashSet<&String> = topo.sinks.iter().collect();
        let isolated: HashSet<&String> = topo
            .order
            .iter()
            .filter(|id| graph.in_degree(id) == 0 && graph.out_degree(id) == 0)
            .collect();
        prop_assert_eq!(&sources & &sinks, isolated);
    }

    #[test]
    fn layers_and_longest_path_agree((doc, _done) in dag_strategy(12)) {
        let graph = doc.graph();
        let topo = Topology::compute(graph).unwrap();

        let mut layer_of = std::collections::HashMap::new();
        for (k, layer) in topo.layers.iter().enumerate() {
            for id in layer {
                layer_of.insert(id.as_str(), k);
            }
        }
        prop_assert_eq!(layer_of.len(), graph.len());
        for id in graph.nodes() {
            let k = layer_of[id];
            let preds = graph.predecessors(id);
            for p in &preds {
                prop_assert!(layer_of[p] < k);
            }
            if k > 0 {
                prop_assert!(preds.iter().any(|p| layer_of[p] == k - 1));
            }
        }

        let path = longest_path(graph, &topo);
        prop_assert_eq!(path.len(), topo.layers.len());
        for pair in path.windows(2) {
            prop_assert!(graph.successors(&pair[0]).contains(&pair[1].as_str()));
        }
    }

    #[test]
    fn initial_ready_is_the_source_set((doc, _done) in dag_strategy(12)) {
        let graph = doc.graph();
        let topo = Topology::compute(graph).unwrap();
        let readiness = Readiness::new(graph, &topo);

        let sources: BTreeSet<String> = topo.sources.iter().cloned().collect();
        prop_assert_eq!(readiness.ready(&BTreeSet::new()), sources);
    }

    #[test]
    fn satisfied_is_monotonic_and_idempotent((doc, done) in dag_strategy(12)) {
        let graph = doc.graph();
        let topo = Topology::compute(graph).unwrap();

        for policy in [SourcePolicy::Unconditional, SourcePolicy::RequireDone] {
            let readiness = Readiness::new(graph, &topo).with_policy(policy);
            let sat = readiness.satisfied(&done);
            prop_assert!(done.is_subset(&sat));
            prop_assert_eq!(readiness.satisfied(&sat), sat.clone());
            if policy == SourcePolicy::Unconditional {
                // Everything ready now is satisfied too.
                prop_assert!(readiness.ready(&done).is_subset(&sat));
            }
        }
    }

    #[test]
    fn strict_sources_satisfy_no_more_than_default((doc, done) in dag_strategy(12)) {
        let graph = doc.graph();
        let topo = Topology::compute(graph).unwrap();

        let strict = Readiness::new(graph, &topo)
            .with_policy(SourcePolicy::RequireDone)
            .satisfied(&done);
        let relaxed = Readiness::new(graph, &topo).satisfied(&done);
        prop_assert!(strict.is_subset(&relaxed));
    }
}
