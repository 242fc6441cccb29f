// src/lib.rs

pub mod cli;
pub mod dag;
pub mod document;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod render;
pub mod types;

use std::io::{self, Write};

use tracing::debug;

use crate::cli::CliArgs;
use crate::document::{InputSource, load_and_validate};
use crate::engine::{EvaluateOptions, evaluate};
use crate::errors::Result;
use crate::render::write_report;
use crate::types::SourcePolicy;

/// High-level entry point used by `main.rs`: report goes to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Same as [`run`], writing the report to `out`.
///
/// This wires together:
/// - document loading + normalisation
/// - extra `--done` entries
/// - evaluation (fails on a cyclic graph before anything is written)
/// - rendering
pub fn run_with_output(args: &CliArgs, out: &mut impl Write) -> Result<()> {
    let source = InputSource::from_arg(args.input.as_deref());
    let mut doc = load_and_validate(&source, args.input_format)?;
    doc.extend_done(args.done.iter().cloned());

    let options = EvaluateOptions {
        source_policy: if args.strict_sources {
            SourcePolicy::RequireDone
        } else {
            SourcePolicy::Unconditional
        },
    };
    debug!(?source, ?options, "evaluating graph document");

    let evaluation = evaluate(doc.graph(), doc.done(), options)?;
    write_report(out, &evaluation, args.format)?;
    Ok(())
}
