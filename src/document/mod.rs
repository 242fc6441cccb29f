// src/document/mod.rs

//! Graph documents: the input of gatedag.
//!
//! Responsibilities:
//! - Define the serde-backed data model (`model.rs`).
//! - Load a document from a file or stdin, as JSON or TOML (`loader.rs`).
//! - Normalise it into an immutable [`crate::dag::TaskGraph`] (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{InputFormat, InputSource, load_and_validate, load_from_path, parse_str};
pub use model::{GraphDocument, RawGraphDocument, RawWeight};
