use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gating rule for a node with at least one predecessor.
///
/// - `And`: every predecessor must be done (default).
/// - `Or`: any single predecessor being done is enough.
///
/// Nodes without predecessors are never gated, whatever their type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateType {
    And,
    Or,
}

impl Default for GateType {
    fn default() -> Self {
        GateType::And
    }
}

impl GateType {
    /// Normalise a raw gate label, falling back to [`GateType::And`] for
    /// anything that is not "and"/"or" (case-insensitive).
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Whether the gate is open given the node's predecessors and a
    /// membership test for "done".
    ///
    /// An empty predecessor list always opens the gate.
    pub fn is_met<'a, I, F>(self, predecessors: I, is_done: F) -> bool
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&str) -> bool,
    {
        let mut preds = predecessors.into_iter().peekable();
        if preds.peek().is_none() {
            return true;
        }
        match self {
            GateType::And => preds.all(|p| is_done(p)),
            GateType::Or => preds.any(|p| is_done(p)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GateType::And => "and",
            GateType::Or => "or",
        }
    }
}

impl FromStr for GateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "and" => Ok(GateType::And),
            "or" => Ok(GateType::Or),
            other => Err(format!(
                "invalid gate type: {other} (expected \"and\" or \"or\")"
            )),
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How nodes without predecessors take part in the satisfaction fixpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourcePolicy {
    /// A node with no predecessors is always satisfied: it has nothing to
    /// wait for.
    #[default]
    Unconditional,
    /// A node with no predecessors is satisfied only once it is marked done.
    RequireDone,
}
