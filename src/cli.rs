// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::document::InputFormat;
use crate::render::OutputFormat;

/// Command-line arguments for `gatedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gatedag",
    version,
    about = "Order an AND/OR-gated task DAG and recommend what to do next.",
    long_about = None
)]
pub struct CliArgs {
    /// Graph document (JSON or TOML). Reads stdin when omitted or `-`.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Input format. Defaults to the file extension (`.toml` → TOML),
    /// otherwise JSON.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Report format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Mark a node as done, in addition to the document's `done` list.
    /// May be repeated.
    #[arg(long = "done", value_name = "ID")]
    pub done: Vec<String>,

    /// Treat nodes without predecessors as satisfied only once they are done.
    #[arg(long)]
    pub strict_sources: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GATEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
