// src/dag/acyclic.rs

use petgraph::algo::toposort;

use crate::dag::graph::TaskGraph;
use crate::errors::{GateDagError, Result};

/// Fail with [`GateDagError::CyclicGraph`] unless the graph is a DAG.
///
/// Self-loops count as cycles. The reported node is one node on a cycle and
/// is only meant for diagnostics.
pub fn ensure_acyclic(graph: &TaskGraph) -> Result<()> {
    match toposort(graph.inner(), None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(GateDagError::CyclicGraph(
            graph.id_at(cycle.node_id()).to_string(),
        )),
    }
}

/// Boolean form of [`ensure_acyclic`].
pub fn is_acyclic(graph: &TaskGraph) -> bool {
    ensure_acyclic(graph).is_ok()
}
