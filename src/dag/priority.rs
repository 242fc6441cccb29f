// src/dag/priority.rs

//! Impact/effort scoring used to recommend a single next task.

use serde::Serialize;

use crate::dag::graph::TaskGraph;

pub const DEFAULT_IMPACT: f64 = 3.0;
pub const DEFAULT_EFFORT: f64 = 3.0;

/// Impact/effort annotation of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weight {
    pub impact: f64,
    pub effort: f64,
}

impl Default for Weight {
    fn default() -> Self {
        Self {
            impact: DEFAULT_IMPACT,
            effort: DEFAULT_EFFORT,
        }
    }
}

impl Weight {
    pub fn new(impact: f64, effort: f64) -> Self {
        Self { impact, effort }
    }

    pub fn score(&self) -> f64 {
        score(self.impact, self.effort)
    }
}

/// Priority score: `impact / effort`, with effort clamped to at least 1.
pub fn score(impact: f64, effort: f64) -> f64 {
    let effort = if effort >= 1.0 { effort } else { 1.0 };
    impact / effort
}

/// A candidate node together with the numbers behind its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredNode {
    pub id: String,
    pub impact: f64,
    pub effort: f64,
    pub score: f64,
}

impl ScoredNode {
    pub fn new(id: &str, weight: Weight) -> Self {
        Self {
            id: id.to_string(),
            impact: weight.impact,
            effort: weight.effort,
            score: weight.score(),
        }
    }
}

/// Score each candidate with the graph's weights, keeping candidate order.
pub fn score_candidates<'a, I>(graph: &TaskGraph, candidates: I) -> Vec<ScoredNode>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|id| ScoredNode::new(id, graph.weight_of(id)))
        .collect()
}

/// Highest-scoring candidate; the first one wins ties.
///
/// Candidates whose score is NaN are never recommended. Returns `None` when
/// no candidate has a comparable score.
pub fn recommend(scored: &[ScoredNode]) -> Option<&ScoredNode> {
    let mut best: Option<&ScoredNode> = None;
    for candidate in scored.iter().filter(|c| !c.score.is_nan()) {
        match best {
            Some(current) if candidate.score > current.score => best = Some(candidate),
            Some(_) => {}
            None => best = Some(candidate),
        }
    }
    best
}
