// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use jsr_core::{OutputRecord, RecordKind, RunOutcome};

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fixed-width tag shown before each record in text mode.
pub fn kind_tag(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Log => "[log]  ",
        RecordKind::Warn => "[warn] ",
        RecordKind::Error => "[error]",
    }
}

/// One record as text. Continuation lines of multi-line messages are
/// indented under the message.
pub fn format_record(record: &OutputRecord, colorize: bool) -> String {
    let tag = kind_tag(record.kind);
    let pad = " ".repeat(tag.len() + 1);
    let message = record.message.lines().collect::<Vec<_>>().join(&format!("\n{pad}"));
    if colorize {
        let code = color::kind_code(record.kind);
        format!("{} {}", color::paint(code, tag), message)
    } else {
        format!("{tag} {message}")
    }
}

pub fn format_text(outcome: &RunOutcome, colorize: bool) -> String {
    outcome.transcript.iter().map(|r| format_record(r, colorize)).collect::<Vec<_>>().join("\n")
}

pub fn format_json(outcome: &RunOutcome) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the outcome to stdout.
pub fn print_outcome(outcome: &RunOutcome, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let text = format_text(outcome, color::should_colorize());
            if !text.is_empty() {
                println!("{text}");
            }
        }
        OutputFormat::Json => println!("{}", format_json(outcome)?),
    }
    Ok(())
}
