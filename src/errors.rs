// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateDagError {
    /// The task graph is not a DAG. Terminal: no ordering, readiness or
    /// scoring output is produced once this is returned.
    #[error("graph has a cycle involving node '{0}'")]
    CyclicGraph(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GateDagError {
    /// Whether this is the cyclic-graph failure (the only core error).
    pub fn is_cyclic(&self) -> bool {
        matches!(self, GateDagError::CyclicGraph(_))
    }
}

pub type Result<T> = std::result::Result<T, GateDagError>;
