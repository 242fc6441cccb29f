// src/dag/longest_path.rs

use std::collections::HashMap;

use crate::dag::graph::TaskGraph;
use crate::dag::topology::Topology;

/// One longest path (by edge count) through the DAG: the critical path.
///
/// Standard DP over the topological order. When several predecessors reach
/// the same distance the smallest identifier is chosen, and the path ends at
/// the first node in topological order with the maximum distance.
///
/// An empty graph yields an empty path; a graph without edges yields the
/// first node of the order on its own.
pub fn longest_path(graph: &TaskGraph, topology: &Topology) -> Vec<String> {
    // node -> (distance, chosen predecessor)
    let mut best: HashMap<&str, (usize, Option<&str>)> =
        HashMap::with_capacity(topology.order.len());

    for id in &topology.order {
        let mut entry = (0usize, None);
        // Predecessors come sorted, so only a strictly longer chain replaces
        // the current pick.
        for pred in graph.predecessors(id) {
            let (dist, _) = best.get(pred).copied().unwrap_or((0, None));
            if entry.1.is_none() || dist + 1 > entry.0 {
                entry = (dist + 1, Some(pred));
            }
        }
        best.insert(id.as_str(), entry);
    }

    let mut end: Option<(&str, usize)> = None;
    for id in &topology.order {
        let dist = best.get(id.as_str()).map(|(d, _)| *d).unwrap_or(0);
        if end.is_none_or(|(_, d)| dist > d) {
            end = Some((id.as_str(), dist));
        }
    }

    let mut path = Vec::new();
    let mut cursor = end.map(|(id, _)| id);
    while let Some(id) = cursor {
        path.push(id.to_string());
        cursor = best.get(id).and_then(|(_, pred)| *pred);
    }
    path.reverse();
    path
}
