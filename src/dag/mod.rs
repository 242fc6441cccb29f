// src/dag/mod.rs

//! Task graph model and the algorithms that run over it.
//!
//! - [`graph`] holds the node/edge model with per-node gate and weight.
//! - [`acyclic`] rejects graphs that are not DAGs.
//! - [`topology`] produces the ordering, sources, sinks and layers.
//! - [`longest_path`] finds one critical path by edge count.
//! - [`readiness`] evaluates AND/OR gates and the satisfaction fixpoint.
//! - [`priority`] scores candidates by impact over effort.

pub mod acyclic;
pub mod graph;
pub mod longest_path;
pub mod priority;
pub mod readiness;
pub mod topology;

pub use acyclic::{ensure_acyclic, is_acyclic};
pub use graph::TaskGraph;
pub use longest_path::longest_path;
pub use priority::{ScoredNode, Weight, recommend, score, score_candidates};
pub use readiness::Readiness;
pub use topology::Topology;
