// src/document/validate.rs

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use crate::dag::{TaskGraph, Weight};
use crate::document::model::{GraphDocument, RawGraphDocument, RawWeight};
use crate::errors::{GateDagError, Result};
use crate::types::GateType;

impl TryFrom<RawGraphDocument> for GraphDocument {
    type Error = GateDagError;

    fn try_from(raw: RawGraphDocument) -> std::result::Result<Self, Self::Error> {
        validate_identifiers(&raw)?;
        let graph = build_graph(&raw);
        let done: BTreeSet<String> = raw.done.into_iter().collect();
        Ok(GraphDocument::new_unchecked(graph, done))
    }
}

/// Empty identifiers cannot name a task anywhere in the document.
fn validate_identifiers(raw: &RawGraphDocument) -> Result<()> {
    if raw.nodes.iter().any(|id| id.is_empty()) {
        return Err(GateDagError::InputError(
            "`nodes` contains an empty identifier".to_string(),
        ));
    }
    for (from, to) in raw.edges.iter() {
        if from.is_empty() || to.is_empty() {
            return Err(GateDagError::InputError(format!(
                "edge [{:?}, {:?}] has an empty endpoint",
                from, to
            )));
        }
    }
    if raw.done.iter().any(|id| id.is_empty()) {
        return Err(GateDagError::InputError(
            "`done` contains an empty identifier".to_string(),
        ));
    }
    Ok(())
}

/// Build the graph with all normalisation applied once:
/// - declared nodes first, then edge endpoints not declared anywhere
/// - duplicate nodes and edges collapse
/// - gate labels resolve to [`GateType`], defaulting to AND; only declared
///   nodes take a label, implicit nodes stay AND
/// - weights fill missing fields with defaults
///
/// Acyclicity is *not* checked here; the engine does that.
fn build_graph(raw: &RawGraphDocument) -> TaskGraph {
    let mut graph = TaskGraph::new();

    for id in raw.nodes.iter() {
        graph.add_node(id);
    }

    let declared = graph.len();
    for (from, to) in raw.edges.iter() {
        graph.add_edge(from, to);
    }
    if graph.len() > declared {
        debug!(
            implicit = graph.len() - declared,
            "edges introduced nodes missing from `nodes`"
        );
    }

    let declared_ids: HashSet<&str> = raw.nodes.iter().map(String::as_str).collect();
    for (id, label) in raw.node_types.iter() {
        if !declared_ids.contains(id.as_str()) {
            debug!(node = %id, "gate type given for undeclared node; ignoring");
            continue;
        }
        if label.parse::<GateType>().is_err() {
            warn!(node = %id, label = %label, "unknown gate type; using \"and\"");
        }
        graph.set_gate(id, GateType::from_label(label));
    }

    for (id, raw_weight) in raw.weights.iter() {
        if !graph.set_weight(id, resolve_weight(raw_weight)) {
            debug!(node = %id, "weight given for unknown node; ignoring");
        }
    }

    graph
}

fn resolve_weight(raw: &RawWeight) -> Weight {
    let defaults = Weight::default();
    Weight::new(
        raw.impact.unwrap_or(defaults.impact),
        raw.effort.unwrap_or(defaults.effort),
    )
}
