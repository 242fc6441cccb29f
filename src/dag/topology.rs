// src/dag/topology.rs

//! Topological ordering, sources/sinks and generation layering.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::dag::acyclic::ensure_acyclic;
use crate::dag::graph::TaskGraph;
use crate::errors::Result;

/// Structural summary of a validated DAG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    /// Every node, each after all of its prerequisites. Among nodes that are
    /// available at the same time, the smallest identifier comes first.
    pub order: Vec<String>,
    /// Nodes with no predecessors, in declaration order.
    pub sources: Vec<String>,
    /// Nodes with no successors, in declaration order.
    pub sinks: Vec<String>,
    /// Topological generations: layer `k` holds the nodes whose longest path
    /// from a source has `k` edges. Each layer is sorted.
    pub layers: Vec<Vec<String>>,
}

impl Topology {
    /// Compute the topology of `graph`, failing if it is cyclic.
    pub fn compute(graph: &TaskGraph) -> Result<Self> {
        ensure_acyclic(graph)?;

        let order = linearize(graph);
        let sources = graph
            .nodes()
            .filter(|id| graph.in_degree(id) == 0)
            .map(str::to_string)
            .collect();
        let sinks = graph
            .nodes()
            .filter(|id| graph.out_degree(id) == 0)
            .map(str::to_string)
            .collect();
        let layers = generations(graph, &order);

        debug!(
            nodes = order.len(),
            layers = layers.len(),
            "computed DAG topology"
        );

        Ok(Self {
            order,
            sources,
            sinks,
            layers,
        })
    }

    /// Position of every node in [`Topology::order`].
    pub fn positions(&self) -> HashMap<&str, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(pos, id)| (id.as_str(), pos))
            .collect()
    }
}

/// Kahn's algorithm with a min-heap so that ties break by identifier.
///
/// `graph` must be acyclic.
fn linearize(graph: &TaskGraph) -> Vec<String> {
    let mut remaining: HashMap<&str, usize> =
        graph.nodes().map(|id| (id, graph.in_degree(id))).collect();

    let mut available: BinaryHeap<Reverse<&str>> = remaining
        .iter()
        .filter(|(_, deg)| **deg == 0)
        .map(|(id, _)| Reverse(*id))
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    while let Some(Reverse(id)) = available.pop() {
        order.push(id.to_string());
        for next in graph.successors(id) {
            if let Some(deg) = remaining.get_mut(next) {
                *deg -= 1;
                if *deg == 0 {
                    available.push(Reverse(next));
                }
            }
        }
    }

    order
}

/// Bucket nodes by longest distance (in edges) from any source.
fn generations(graph: &TaskGraph, order: &[String]) -> Vec<Vec<String>> {
    let mut depth: HashMap<&str, usize> = HashMap::with_capacity(order.len());
    let mut layers: Vec<Vec<String>> = Vec::new();

    for id in order {
        let level = graph
            .predecessors(id)
            .iter()
            .filter_map(|p| depth.get(p))
            .map(|d| d + 1)
            .max()
            .unwrap_or(0);
        depth.insert(id.as_str(), level);

        if layers.len() <= level {
            layers.resize_with(level + 1, Vec::new);
        }
        layers[level].push(id.clone());
    }

    for layer in layers.iter_mut() {
        layer.sort();
    }
    layers
}
