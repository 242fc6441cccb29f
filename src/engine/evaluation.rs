// src/engine/evaluation.rs

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::dag::{
    Readiness, ScoredNode, TaskGraph, Topology, longest_path, recommend, score_candidates,
};
use crate::engine::EvaluateOptions;
use crate::errors::Result;
use crate::types::GateType;

/// Resolved gate type of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeGate {
    pub id: String,
    pub gate: GateType,
}

/// Readiness relative to a non-empty completed set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    /// The completed set as given (sorted, inert entries included).
    pub done: Vec<String>,
    /// Ready nodes that are not done yet, sorted.
    pub ready_now: Vec<String>,
    /// Best-scoring node of `ready_now`.
    pub recommended_next: Option<String>,
    /// Done plus everything transitively unlocked, sorted.
    pub satisfied: Vec<String>,
    /// Every sink is satisfied.
    pub goal_reached: bool,
}

/// Full result of evaluating one graph snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub order: Vec<String>,
    pub sources: Vec<String>,
    pub sinks: Vec<String>,
    /// Gate per node, in topological order.
    pub node_types: Vec<NodeGate>,
    /// Nodes ready with nothing done, sorted.
    pub initial_ready: Vec<String>,
    /// Present only when a non-empty completed set was supplied.
    pub progress: Option<Progress>,
    pub layers: Vec<Vec<String>>,
    pub longest_path: Vec<String>,
    /// Impact/effort/score per source, in declaration order.
    pub source_scores: Vec<ScoredNode>,
    pub recommended_first: Option<String>,
}

/// Evaluate `graph` against the completed set `done`.
///
/// Returns [`crate::errors::GateDagError::CyclicGraph`] from
/// [`Topology::compute`], before anything else is computed, if the graph is
/// not a DAG. An empty `done` is treated as
/// "no completed set supplied": [`Evaluation::progress`] is then `None`.
pub fn evaluate(
    graph: &TaskGraph,
    done: &BTreeSet<String>,
    options: EvaluateOptions,
) -> Result<Evaluation> {
    let topology = Topology::compute(graph)?;
    let critical = longest_path(graph, &topology);
    let readiness = Readiness::new(graph, &topology).with_policy(options.source_policy);

    let node_types = topology
        .order
        .iter()
        .map(|id| NodeGate {
            id: id.clone(),
            gate: graph.gate_of(id),
        })
        .collect();

    let initial_ready = readiness.ready(&BTreeSet::new()).into_iter().collect();

    let progress = if done.is_empty() {
        None
    } else {
        Some(progress_for(graph, &readiness, done))
    };

    let source_scores = score_candidates(graph, topology.sources.iter().map(String::as_str));
    let recommended_first = recommend(&source_scores).map(|s| s.id.clone());

    info!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        done = done.len(),
        recommended_first = recommended_first.as_deref().unwrap_or(""),
        "graph evaluated"
    );

    let Topology {
        order,
        sources,
        sinks,
        layers,
    } = topology;

    Ok(Evaluation {
        order,
        sources,
        sinks,
        node_types,
        initial_ready,
        progress,
        layers,
        longest_path: critical,
        source_scores,
        recommended_first,
    })
}

fn progress_for(graph: &TaskGraph, readiness: &Readiness<'_>, done: &BTreeSet<String>) -> Progress {
    let ready_now = readiness.ready_now(done);
    let scored = score_candidates(graph, ready_now.iter().map(String::as_str));
    let recommended_next = recommend(&scored).map(|s| s.id.clone());

    let satisfied = readiness.satisfied(done);
    let goal_reached = readiness.sinks_within(&satisfied);

    let inert: Vec<&str> = done
        .iter()
        .filter(|id| !graph.contains(id))
        .map(String::as_str)
        .collect();
    if !inert.is_empty() {
        debug!(?inert, "completed set names unknown nodes; ignoring them");
    }

    Progress {
        done: done.iter().cloned().collect(),
        ready_now: ready_now.into_iter().collect(),
        recommended_next,
        satisfied: satisfied.into_iter().collect(),
        goal_reached,
    }
}
