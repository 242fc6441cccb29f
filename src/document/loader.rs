// src/document/loader.rs

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use crate::document::model::{GraphDocument, RawGraphDocument};
use crate::errors::Result;

/// Serialization format of a graph document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Guess the format from a file extension: `.toml` is TOML, anything
    /// else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

/// Where a graph document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// `None` and `-` mean standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::Path(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Explicit format if given, else inferred (stdin defaults to JSON).
    pub fn resolve_format(&self, explicit: Option<InputFormat>) -> InputFormat {
        match (explicit, self) {
            (Some(format), _) => format,
            (None, InputSource::Path(path)) => InputFormat::from_path(path),
            (None, InputSource::Stdin) => InputFormat::Json,
        }
    }
}

/// Deserialize a raw document from text.
///
/// This only performs deserialization; normalisation happens when the result
/// is converted into a [`GraphDocument`].
pub fn parse_str(contents: &str, format: InputFormat) -> Result<RawGraphDocument> {
    let raw = match format {
        InputFormat::Json => serde_json::from_str(contents)?,
        InputFormat::Toml => toml::from_str(contents)?,
    };
    Ok(raw)
}

/// Read and deserialize a raw document from a file.
pub fn load_from_path(path: impl AsRef<Path>, format: InputFormat) -> Result<RawGraphDocument> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = ?path, ?format, bytes = contents.len(), "read graph document");
    parse_str(&contents, format)
}

/// Read and deserialize a raw document from any reader (usually stdin).
pub fn load_from_reader(mut reader: impl Read, format: InputFormat) -> Result<RawGraphDocument> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    debug!(?format, bytes = contents.len(), "read graph document from stream");
    parse_str(&contents, format)
}

/// Load a document from `source` and normalise it.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_and_validate(
    source: &InputSource,
    format: Option<InputFormat>,
) -> Result<GraphDocument> {
    let format = source.resolve_format(format);
    let raw = match source {
        InputSource::Path(path) => load_from_path(path, format)?,
        InputSource::Stdin => load_from_reader(std::io::stdin().lock(), format)?,
    };
    GraphDocument::try_from(raw)
}
