// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output sink: turns `console.*` calls into transcript records.
//!
//! A [`CaptureSink`] belongs to exactly one run. It owns that run's
//! transcript handle, so callbacks firing late can only ever append to the
//! transcript of the run that scheduled them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use jsr_core::{ErrorReport, IdGen, OutputRecord, RecordKind, SharedTranscript};
use rquickjs::{CatchResultExt, Ctx, Function};

use crate::console::{Console, ConsoleMethod};
use crate::error::EngineError;

const RENDER_JS: &str = include_str!("js/render.js");
const CONSOLE_JS: &str = include_str!("js/console.js");

/// Per-run capture surface.
///
/// Cloning is cheap; all clones share the transcript and flags.
#[derive(Clone)]
pub struct CaptureSink {
    inner: Arc<SinkInner>,
}

struct SinkInner {
    transcript: SharedTranscript,
    ids: Arc<dyn IdGen>,
    console: Arc<dyn Console>,
    produced: AtomicBool,
    installed: AtomicBool,
}

impl CaptureSink {
    pub fn new(
        transcript: SharedTranscript,
        ids: Arc<dyn IdGen>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            inner: Arc::new(SinkInner {
                transcript,
                ids,
                console,
                produced: AtomicBool::new(false),
                installed: AtomicBool::new(false),
            }),
        }
    }

    /// Replace `console.log/info/warn/error` in `ctx` with interceptors.
    ///
    /// Only the first call does anything.
    pub fn install(&self, ctx: &Ctx<'_>) -> Result<(), EngineError> {
        if self.inner.installed.load(Ordering::Acquire) {
            return Ok(());
        }

        let render = render_function(ctx)?;
        let factory: Function = ctx.eval(CONSOLE_JS).catch(ctx).map_err(binding)?;

        let sink = self.clone();
        let emit = Function::new(ctx.clone(), move |method: String, args: Vec<String>| {
            match method.parse::<ConsoleMethod>() {
                Ok(method) => sink.capture(method, &args),
                Err(e) => tracing::warn!(error = %e, "ignoring console call"),
            }
        })?;

        factory.call::<_, ()>((emit, render)).catch(ctx).map_err(binding)?;
        self.inner.installed.store(true, Ordering::Release);
        tracing::trace!("console interceptors installed");
        Ok(())
    }

    pub fn is_installed(&self) -> bool {
        self.inner.installed.load(Ordering::Acquire)
    }

    /// Record one intercepted call and forward it to the real console.
    pub fn capture(&self, method: ConsoleMethod, args: &[String]) {
        self.append(method.kind(), args.join(" "));
        self.inner.console.forward(method, args);
    }

    /// Record an exception that escaped a timer callback.
    pub fn report_uncaught(&self, report: &ErrorReport) {
        let message = format!("Uncaught {}: {}", report.kind, report.message);
        self.inner.console.error(std::slice::from_ref(&message));
        self.append(RecordKind::Error, message);
    }

    /// Append a record and mark the run as having produced output.
    pub fn append(&self, kind: RecordKind, message: impl Into<String>) {
        self.inner.transcript.append(OutputRecord::new(self.inner.ids.as_ref(), kind, message));
        self.mark_produced();
    }

    /// Append the header and frame records of a failed run.
    pub fn append_report(&self, report: &ErrorReport) {
        for record in report.to_records(self.inner.ids.as_ref()) {
            self.inner.transcript.append(record);
        }
        self.mark_produced();
    }

    pub fn mark_produced(&self) {
        self.inner.produced.store(true, Ordering::Release);
    }

    pub fn produced_output(&self) -> bool {
        self.inner.produced.load(Ordering::Acquire)
    }

    pub fn transcript(&self) -> &SharedTranscript {
        &self.inner.transcript
    }

    pub fn ids(&self) -> &dyn IdGen {
        self.inner.ids.as_ref()
    }
}

impl std::fmt::Debug for CaptureSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSink")
            .field("records", &self.inner.transcript.len())
            .field("produced", &self.produced_output())
            .field("installed", &self.is_installed())
            .finish()
    }
}

/// Evaluate the argument renderer into `ctx`.
pub(crate) fn render_function<'js>(ctx: &Ctx<'js>) -> Result<Function<'js>, EngineError> {
    ctx.eval(RENDER_JS).catch(ctx).map_err(binding)
}

pub(crate) fn binding(err: impl std::fmt::Display) -> EngineError {
    EngineError::Binding(err.to_string())
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
