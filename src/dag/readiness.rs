// src/dag/readiness.rs

//! Gate-aware readiness and the satisfaction fixpoint.
//!
//! Two related questions are answered for a completed set `done`:
//!
//! - [`Readiness::ready`]: which nodes could start *right now*, looking only
//!   at the literal `done` set.
//! - [`Readiness::satisfied`]: which nodes are done or guaranteed to become
//!   executable, following chains of satisfied predecessors through each
//!   node's AND/OR gate.

use std::collections::BTreeSet;

use tracing::trace;

use crate::dag::graph::TaskGraph;
use crate::dag::topology::Topology;
use crate::types::SourcePolicy;

/// Readiness evaluator over a validated DAG.
#[derive(Debug, Clone, Copy)]
pub struct Readiness<'a> {
    graph: &'a TaskGraph,
    topology: &'a Topology,
    policy: SourcePolicy,
}

impl<'a> Readiness<'a> {
    pub fn new(graph: &'a TaskGraph, topology: &'a Topology) -> Self {
        Self {
            graph,
            topology,
            policy: SourcePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SourcePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SourcePolicy {
        self.policy
    }

    /// Nodes whose gate is open against `done`.
    ///
    /// Every node is checked, including those already in `done`; with an
    /// empty set this is the initial-ready set. Use [`Readiness::ready_now`]
    /// for the actionable subset.
    pub fn ready(&self, done: &BTreeSet<String>) -> BTreeSet<String> {
        self.graph
            .nodes()
            .filter(|id| self.gate_open(id, done))
            .map(str::to_string)
            .collect()
    }

    /// Ready nodes that are not done yet.
    pub fn ready_now(&self, done: &BTreeSet<String>) -> BTreeSet<String> {
        self.ready(done)
            .into_iter()
            .filter(|id| !done.contains(id))
            .collect()
    }

    /// Fixpoint closure of `done` under the gates.
    ///
    /// Starts from `done` (unknown identifiers are carried along but affect
    /// nothing) and rescans the topological order until a full pass adds no
    /// node. Each productive pass grows the set, so there are at most `V + 1`
    /// passes.
    pub fn satisfied(&self, done: &BTreeSet<String>) -> BTreeSet<String> {
        let mut sat = done.clone();
        let mut passes = 0usize;

        loop {
            passes += 1;
            let mut changed = false;

            for id in &self.topology.order {
                if sat.contains(id) {
                    continue;
                }
                let preds = self.graph.predecessors(id);
                let open = if preds.is_empty() {
                    self.policy == SourcePolicy::Unconditional
                } else {
                    self.graph
                        .gate_of(id)
                        .is_met(preds, |p| sat.contains(p))
                };
                if open {
                    trace!(node = %id, "node satisfied");
                    sat.insert(id.clone());
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        trace!(passes, satisfied = sat.len(), "satisfaction fixpoint reached");
        sat
    }

    /// Whether every sink is satisfied. A graph without sinks has no goal, so
    /// this is `false` for the empty graph.
    pub fn goal_reached(&self, done: &BTreeSet<String>) -> bool {
        self.sinks_within(&self.satisfied(done))
    }

    /// Whether `sat` (typically a [`Readiness::satisfied`] result) covers
    /// every sink. `false` when there are no sinks.
    pub fn sinks_within(&self, sat: &BTreeSet<String>) -> bool {
        !self.topology.sinks.is_empty()
            && self.topology.sinks.iter().all(|sink| sat.contains(sink))
    }

    fn gate_open(&self, id: &str, done: &BTreeSet<String>) -> bool {
        self.graph
            .gate_of(id)
            .is_met(self.graph.predecessors(id), |p| done.contains(p))
    }
}
