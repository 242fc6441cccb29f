#![allow(dead_code)]

use std::collections::BTreeMap;

use gatedag::document::{GraphDocument, RawGraphDocument, RawWeight};
use gatedag::errors::Result;

/// Builder for `GraphDocument` to simplify test setup.
pub struct GraphDocumentBuilder {
    raw: RawGraphDocument,
}

impl GraphDocumentBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawGraphDocument {
                nodes: Vec::new(),
                edges: Vec::new(),
                weights: BTreeMap::new(),
                node_types: BTreeMap::new(),
                done: Vec::new(),
            },
        }
    }

    pub fn node(mut self, id: &str) -> Self {
        self.raw.nodes.push(id.to_string());
        self
    }

    pub fn nodes(mut self, ids: &[&str]) -> Self {
        self.raw.nodes.extend(ids.iter().map(|s| s.to_string()));
        self
    }

    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.raw.edges.push((from.to_string(), to.to_string()));
        self
    }

    pub fn edges(mut self, pairs: &[(&str, &str)]) -> Self {
        for (from, to) in pairs {
            self.raw.edges.push((from.to_string(), to.to_string()));
        }
        self
    }

    /// Raw gate label, passed through normalisation like a document value.
    pub fn gate(mut self, id: &str, label: &str) -> Self {
        self.raw.node_types.insert(id.to_string(), label.to_string());
        self
    }

    pub fn or_gate(self, id: &str) -> Self {
        self.gate(id, "or")
    }

    pub fn weight(mut self, id: &str, impact: f64, effort: f64) -> Self {
        self.raw.weights.insert(
            id.to_string(),
            RawWeight {
                impact: Some(impact),
                effort: Some(effort),
            },
        );
        self
    }

    pub fn done(mut self, id: &str) -> Self {
        self.raw.done.push(id.to_string());
        self
    }

    pub fn raw(self) -> RawGraphDocument {
        self.raw
    }

    pub fn try_build(self) -> Result<GraphDocument> {
        GraphDocument::try_from(self.raw)
    }

    pub fn build(self) -> GraphDocument {
        self.try_build()
            .expect("Failed to build valid graph document from builder")
    }
}

impl Default for GraphDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The A,B -> C -> D graph used throughout the tests (C is AND-gated).
pub fn merge_chain() -> GraphDocumentBuilder {
    GraphDocumentBuilder::new()
        .nodes(&["A", "B", "C", "D"])
        .edges(&[("A", "C"), ("B", "C"), ("C", "D")])
}
