// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::dag::priority::Weight;
use crate::types::GateType;

/// Internal node payload: identifier plus the per-node annotations.
#[derive(Debug, Clone)]
pub(crate) struct TaskNode {
    id: String,
    gate: GateType,
    weight: Weight,
}

/// Immutable-after-construction task graph keyed by node identifier.
///
/// Edge direction is prerequisite -> dependent: an edge `A -> C` means `A`
/// must be done before `C`. Node indices follow insertion order, which is the
/// graph's *declaration order*.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    graph: DiGraph<TaskNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with default gate and weight. Re-adding an existing
    /// identifier is a no-op.
    pub fn add_node(&mut self, id: &str) {
        self.ensure_node(id);
    }

    /// Add a prerequisite edge `from -> to`, creating missing endpoints.
    ///
    /// Duplicate edges are idempotent. Self-loops are kept so that the
    /// acyclicity check can reject them.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let a = self.ensure_node(from);
        let b = self.ensure_node(to);
        self.graph.update_edge(a, b, ());
    }

    /// Set the gate type of an existing node. Returns `false` for unknown ids.
    pub fn set_gate(&mut self, id: &str, gate: GateType) -> bool {
        match self.index.get(id) {
            Some(&idx) => {
                self.graph[idx].gate = gate;
                true
            }
            None => false,
        }
    }

    /// Set the weight of an existing node. Returns `false` for unknown ids.
    pub fn set_weight(&mut self, id: &str, weight: Weight) -> bool {
        match self.index.get(id) {
            Some(&idx) => {
                self.graph[idx].weight = weight;
                true
            }
            None => false,
        }
    }

    /// All node identifiers, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.graph[idx].id.as_str())
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Immediate prerequisites of a node, sorted by identifier.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Immediate dependents of a node, sorted by identifier.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Outgoing)
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.degree(id, Direction::Incoming)
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.degree(id, Direction::Outgoing)
    }

    /// Resolved gate type; unknown identifiers report the default.
    pub fn gate_of(&self, id: &str) -> GateType {
        self.index
            .get(id)
            .map(|&idx| self.graph[idx].gate)
            .unwrap_or_default()
    }

    /// Resolved weight; unknown identifiers report the default.
    pub fn weight_of(&self, id: &str) -> Weight {
        self.index
            .get(id)
            .map(|&idx| self.graph[idx].weight)
            .unwrap_or_default()
    }

    /// Underlying petgraph structure, for algorithms that work on indices.
    pub(crate) fn inner(&self) -> &DiGraph<TaskNode, ()> {
        &self.graph
    }

    pub(crate) fn id_at(&self, idx: NodeIndex) -> &str {
        self.graph[idx].id.as_str()
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(TaskNode {
            id: id.to_string(),
            gate: GateType::default(),
            weight: Weight::default(),
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    fn neighbors(&self, id: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| self.id_at(n))
            .collect();
        out.sort_unstable();
        out
    }

    fn degree(&self, id: &str, dir: Direction) -> usize {
        self.index
            .get(id)
            .map(|&idx| self.graph.neighbors_directed(idx, dir).count())
            .unwrap_or(0)
    }
}
