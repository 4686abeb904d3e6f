// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run results: error reports, run phases, and the finalized outcome.

use serde::{Deserialize, Serialize};

use crate::{IdGen, OutputRecord, RecordKind, Transcript};

/// Warn record produced when the submitted source is blank.
pub const NO_CODE_MESSAGE: &str = "// No code to execute";

/// Log record produced when a successful run printed nothing at all.
pub const NO_OUTPUT_MESSAGE: &str = "✅ Code executed successfully (no output)";

/// Prefix of the record synthesized for an unconsumed return value.
pub const RETURN_MARKER: &str = "→";

/// Prefix of the error header record.
pub const ERROR_MARKER: &str = "❌";

/// Maximum number of stack frames carried by an [`ErrorReport`].
pub const MAX_FRAMES: usize = 2;

/// Structured description of an error raised by a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error class name, e.g. `TypeError`.
    pub kind: String,
    pub message: String,
    /// Up to [`MAX_FRAMES`] trimmed stack frames.
    pub frames: Vec<String>,
}

impl ErrorReport {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: kind.into(), message: message.into(), frames: Vec::new() }
    }

    /// Build a report, extracting frames from a raw stack trace.
    pub fn with_stack(
        kind: impl Into<String>,
        message: impl Into<String>,
        stack: Option<&str>,
    ) -> Self {
        let mut report = Self::new(kind, message);
        if let Some(stack) = stack {
            report.frames = stack_frames(stack);
        }
        report
    }

    /// `❌ TypeError: bad`
    pub fn header(&self) -> String {
        format!("{} {}: {}", ERROR_MARKER, self.kind, self.message)
    }

    /// Error records for a transcript: the header, then one per frame.
    pub fn to_records(&self, ids: &dyn IdGen) -> Vec<OutputRecord> {
        let mut records = vec![OutputRecord::new(ids, RecordKind::Error, self.header())];
        records.extend(
            self.frames.iter().map(|f| OutputRecord::new(ids, RecordKind::Error, format!("   {f}"))),
        );
        records
    }
}

/// First [`MAX_FRAMES`] non-empty lines of a stack trace, skipping a leading
/// `Kind: message` header line when the engine includes one.
pub fn stack_frames(stack: &str) -> Vec<String> {
    let mut lines = stack.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();
    if lines.peek().is_some_and(|first| !first.starts_with("at ")) {
        lines.next();
    }
    lines.take(MAX_FRAMES).map(str::to_string).collect()
}

/// How a run settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Settlement {
    Success,
    Failed,
}

crate::simple_display! {
    Settlement {
        Success => "success",
        Failed => "failed",
    }
}

/// Lifecycle of a single run: `Idle → Running → Draining → Settled`.
///
/// Failed runs go straight from `Running` to `Settled(Failed)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", content = "settlement", rename_all = "lowercase")]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Draining,
    Settled(Settlement),
}

crate::simple_display! {
    RunPhase {
        Idle => "idle",
        Running => "running",
        Draining => "draining",
        Settled(..) => "settled",
    }
}

impl RunPhase {
    pub fn is_settled(&self) -> bool {
        matches!(self, RunPhase::Settled(_))
    }
}

/// Finalized result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub transcript: Transcript,
    /// Rendered return value of the top-level body, if it returned one.
    pub return_value: Option<String>,
    pub error: Option<ErrorReport>,
}

impl RunOutcome {
    pub fn success(transcript: Transcript, return_value: Option<String>) -> Self {
        Self { transcript, return_value, error: None }
    }

    pub fn failed(transcript: Transcript, error: ErrorReport) -> Self {
        Self { transcript, return_value: None, error: Some(error) }
    }

    pub fn settlement(&self) -> Settlement {
        if self.error.is_some() {
            Settlement::Failed
        } else {
            Settlement::Success
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
