// src/render.rs

//! Report rendering for an [`Evaluation`].
//!
//! The text report is a sequence of upper-case section headers, each
//! followed by one value per line, so it is easy to read and to grep.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::engine::Evaluation;

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write `evaluation` to `out` in the requested format.
pub fn write_report(
    out: &mut impl Write,
    evaluation: &Evaluation,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, evaluation),
        OutputFormat::Json => write_json(out, evaluation),
    }
}

/// Sectioned plain-text report.
pub fn write_text(out: &mut impl Write, ev: &Evaluation) -> io::Result<()> {
    section(out, "TOPOLOGICAL_ORDER", &ev.order)?;
    section(out, "SOURCES", &ev.sources)?;
    section(out, "SINKS", &ev.sinks)?;

    writeln!(out, "NODE_TYPES")?;
    for node in &ev.node_types {
        writeln!(out, "{}\t{}", node.id, node.gate)?;
    }

    section(out, "READY_INITIAL", &ev.initial_ready)?;

    if let Some(progress) = &ev.progress {
        section(out, "READY_NOW", &progress.ready_now)?;
        writeln!(out, "RECOMMENDED_NEXT")?;
        writeln!(out, "{}", progress.recommended_next.as_deref().unwrap_or(""))?;
        writeln!(out, "GOAL_REACHED")?;
        writeln!(out, "{}", if progress.goal_reached { "yes" } else { "no" })?;
    }

    writeln!(out, "LAYERS")?;
    for (i, layer) in ev.layers.iter().enumerate() {
        writeln!(out, "layer_{i}\t{}", layer.join("\t"))?;
    }

    section(out, "LONGEST_PATH", &ev.longest_path)?;

    writeln!(out, "SOURCE_SCORES")?;
    for s in &ev.source_scores {
        writeln!(
            out,
            "{}\timpact={:?}\teffort={:?}\tscore={:.2}",
            s.id, s.impact, s.effort, s.score
        )?;
    }

    writeln!(out, "RECOMMENDED_FIRST")?;
    writeln!(out, "{}", ev.recommended_first.as_deref().unwrap_or(""))?;
    Ok(())
}

/// Pretty-printed JSON report.
pub fn write_json(out: &mut impl Write, ev: &Evaluation) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, ev)?;
    writeln!(out)
}

fn section(out: &mut impl Write, header: &str, items: &[String]) -> io::Result<()> {
    writeln!(out, "{header}")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
