// tests/topology.rs

use std::error::Error;

use gatedag::dag::{Topology, ensure_acyclic, is_acyclic, longest_path};
use gatedag::errors::GateDagError;
use gatedag_test_utils::builders::{GraphDocumentBuilder, merge_chain};

type TestResult = Result<(), Box<dyn Error>>;

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn merge_chain_order_sources_sinks() -> TestResult {
    let doc = merge_chain().build();
    let topo = Topology::compute(doc.graph())?;

    assert_eq!(topo.order, strings(&["A", "B", "C", "D"]));
    assert_eq!(topo.sources, strings(&["A", "B"]));
    assert_eq!(topo.sinks, strings(&["D"]));
    assert_eq!(
        topo.layers,
        vec![strings(&["A", "B"]), strings(&["C"]), strings(&["D"])]
    );
    Ok(())
}

#[test]
fn ties_break_by_identifier_not_declaration() -> TestResult {
    let doc = GraphDocumentBuilder::new()
        .nodes(&["zeta", "alpha", "mid"])
        .edge("zeta", "mid")
        .build();
    let topo = Topology::compute(doc.graph())?;

    assert_eq!(topo.order, strings(&["alpha", "zeta", "mid"]));
    // Sources and sinks keep declaration order.
    assert_eq!(topo.sources, strings(&["zeta", "alpha"]));
    assert_eq!(topo.sinks, strings(&["alpha", "mid"]));
    Ok(())
}

#[test]
fn order_respects_every_edge() -> TestResult {
    let edges = [
        ("e", "a"),
        ("d", "a"),
        ("c", "b"),
        ("b", "a"),
        ("e", "c"),
        ("f", "d"),
    ];
    let doc = GraphDocumentBuilder::new().edges(&edges).build();
    let topo = Topology::compute(doc.graph())?;
    let pos = topo.positions();

    assert_eq!(topo.order.len(), 6);
    for (from, to) in edges {
        assert!(pos[from] < pos[to], "{from} should precede {to}");
    }
    Ok(())
}

#[test]
fn layers_use_longest_distance_from_a_source() -> TestResult {
    // A -> B -> C and A -> C: C sits two layers down, not one.
    let doc = GraphDocumentBuilder::new()
        .edges(&[("A", "B"), ("B", "C"), ("A", "C"), ("X", "C")])
        .build();
    let topo = Topology::compute(doc.graph())?;

    assert_eq!(
        topo.layers,
        vec![strings(&["A", "X"]), strings(&["B"]), strings(&["C"])]
    );
    Ok(())
}

#[test]
fn isolated_nodes_are_sources_and_sinks() -> TestResult {
    let doc = GraphDocumentBuilder::new()
        .nodes(&["lonely", "A", "B"])
        .edge("A", "B")
        .build();
    let topo = Topology::compute(doc.graph())?;

    let both: Vec<&String> = topo
        .sources
        .iter()
        .filter(|s| topo.sinks.contains(s))
        .collect();
    assert_eq!(both, vec!["lonely"]);
    Ok(())
}

#[test]
fn two_node_cycle_is_rejected() {
    let doc = GraphDocumentBuilder::new()
        .nodes(&["A", "B"])
        .edges(&[("A", "B"), ("B", "A")])
        .build();

    assert!(!is_acyclic(doc.graph()));
    match Topology::compute(doc.graph()) {
        Err(GateDagError::CyclicGraph(node)) => {
            assert!(node == "A" || node == "B");
        }
        other => panic!("expected CyclicGraph, got {other:?}"),
    }
}

#[test]
fn self_loop_is_a_cycle() {
    let doc = GraphDocumentBuilder::new().edge("A", "A").build();
    let err = ensure_acyclic(doc.graph()).unwrap_err();
    assert!(err.is_cyclic());
}

#[test]
fn duplicate_edges_are_idempotent() -> TestResult {
    let doc = GraphDocumentBuilder::new()
        .edges(&[("A", "B"), ("A", "B"), ("A", "B")])
        .build();

    assert_eq!(doc.graph().edge_count(), 1);
    assert_eq!(doc.graph().in_degree("B"), 1);
    Ok(())
}

#[test]
fn longest_path_follows_the_critical_chain() -> TestResult {
    let doc = GraphDocumentBuilder::new()
        .edges(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("A", "D"),
            ("X", "D"),
            ("X", "Y"),
        ])
        .build();
    let topo = Topology::compute(doc.graph())?;

    assert_eq!(longest_path(doc.graph(), &topo), strings(&["A", "B", "C", "D"]));
    Ok(())
}

#[test]
fn longest_path_ties_pick_smallest_predecessor() -> TestResult {
    let doc = merge_chain().build();
    let topo = Topology::compute(doc.graph())?;

    assert_eq!(longest_path(doc.graph(), &topo), strings(&["A", "C", "D"]));
    Ok(())
}

#[test]
fn longest_path_edge_cases() -> TestResult {
    let empty = GraphDocumentBuilder::new().build();
    let topo = Topology::compute(empty.graph())?;
    assert!(longest_path(empty.graph(), &topo).is_empty());

    let flat = GraphDocumentBuilder::new().nodes(&["b", "a"]).build();
    let topo = Topology::compute(flat.graph())?;
    assert_eq!(longest_path(flat.graph(), &topo), strings(&["a"]));
    Ok(())
}
