// src/document/model.rs

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::dag::TaskGraph;

/// Graph document as read from JSON or TOML, before normalisation.
///
/// ```json
/// {
///   "nodes": ["A", "B", "C", "D"],
///   "edges": [["A", "C"], ["B", "C"], ["C", "D"]],
///   "weights": {"A": {"impact": 5, "effort": 2}},
///   "node_types": {"C": "or"},
///   "done": ["A"]
/// }
/// ```
///
/// The same shape in TOML:
///
/// ```toml
/// nodes = ["A", "B", "C", "D"]
/// edges = [["A", "C"], ["B", "C"], ["C", "D"]]
/// done = ["A"]
///
/// [weights.A]
/// impact = 5
/// effort = 2
///
/// [node_types]
/// C = "or"
/// ```
///
/// All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGraphDocument {
    /// Declared node identifiers, in declaration order.
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Prerequisite edges `[from, to]`: `from` must be done before `to`.
    #[serde(default)]
    pub edges: Vec<(String, String)>,

    /// Optional impact/effort per node.
    #[serde(default)]
    pub weights: BTreeMap<String, RawWeight>,

    /// Gate label per node ("and" / "or"); anything else means "and".
    #[serde(default)]
    pub node_types: BTreeMap<String, String>,

    /// Identifiers already completed.
    #[serde(default)]
    pub done: Vec<String>,
}

/// `weights.<id>` entry. Each field falls back to its default on its own.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawWeight {
    #[serde(default)]
    pub impact: Option<f64>,

    #[serde(default)]
    pub effort: Option<f64>,
}

/// A normalised graph document: the immutable task graph plus the
/// completed set.
///
/// Built from [`RawGraphDocument`] via `TryFrom` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct GraphDocument {
    graph: TaskGraph,
    done: BTreeSet<String>,
}

impl GraphDocument {
    pub(crate) fn new_unchecked(graph: TaskGraph, done: BTreeSet<String>) -> Self {
        Self { graph, done }
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn done(&self) -> &BTreeSet<String> {
        &self.done
    }

    /// Add identifiers to the completed set (e.g. from `--done`).
    pub fn extend_done<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.done.extend(ids.into_iter().map(Into::into));
    }
}
