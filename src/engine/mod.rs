// src/engine/mod.rs

//! Evaluation engine for gatedag.
//!
//! Ties the [`crate::dag`] algorithms together for one graph snapshot:
//! - acyclicity check (terminal on failure)
//! - topology and critical path
//! - initial readiness and, when a completed set is given, current progress
//! - source scoring and the overall recommendation
//!
//! Everything here is pure: no I/O, no shared state between calls.

pub mod evaluation;

pub use evaluation::{Evaluation, NodeGate, Progress, evaluate};

use crate::types::SourcePolicy;

/// Knobs for a single evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateOptions {
    /// How sourceless nodes enter the satisfaction fixpoint.
    pub source_policy: SourcePolicy,
}
