// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run coordinator
//!
//! Drives one run through `Idle → Running → Draining → Settled`. Every run
//! gets its own transcript, capture sink and engine context; the coordinator
//! only remembers which transcript is the active one for [`Coordinator::clear`]
//! and [`Coordinator::transcript`].

use std::sync::Arc;

use jsr_core::{
    IdGen, OutputRecord, RecordKind, RunId, RunOutcome, RunPhase, Settlement, SharedTranscript,
    Transcript, UuidIdGen, NO_CODE_MESSAGE, NO_OUTPUT_MESSAGE, RETURN_MARKER,
};
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::Instrument;

use crate::config::RunConfig;
use crate::console::{Console, TracingConsole};
use crate::error::ScriptError;
use crate::executor::ScriptExecutor;
use crate::sink::CaptureSink;

/// The run most recently started.
#[derive(Debug, Default)]
struct ActiveRun {
    run_id: Option<RunId>,
    transcript: SharedTranscript,
    phase: RunPhase,
}

/// Starts runs and tracks the phase and transcript of the most recent one.
pub struct Coordinator {
    config: RunConfig,
    executor: ScriptExecutor,
    console: Arc<dyn Console>,
    ids: Arc<dyn IdGen>,
    active: Mutex<ActiveRun>,
}

impl Coordinator {
    /// Coordinator forwarding to [`TracingConsole`] with UUID record ids.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            executor: ScriptExecutor::new(),
            console: Arc::new(TracingConsole),
            ids: Arc::new(UuidIdGen),
            active: Mutex::new(ActiveRun::default()),
        }
    }

    pub fn with_console(mut self, console: impl Console) -> Self {
        self.console = Arc::new(console);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGen + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute `source` and wait for the run to settle.
    ///
    /// Script failures are reported in the returned outcome, never as a Rust
    /// error. A run started while another is still draining does not wait for
    /// it; each keeps writing to its own transcript.
    pub async fn run(&self, source: &str) -> RunOutcome {
        let run_id = RunId::generate();
        let span = tracing::info_span!("run", run_id = %run_id.short(8));
        self.run_inner(run_id, source).instrument(span).await
    }

    async fn run_inner(&self, run_id: RunId, source: &str) -> RunOutcome {
        let transcript = SharedTranscript::new();
        self.activate(&run_id, transcript.clone());

        if source.trim().is_empty() {
            transcript.append(OutputRecord::new(self.ids.as_ref(), RecordKind::Warn, NO_CODE_MESSAGE));
            self.set_phase(&run_id, RunPhase::Settled(Settlement::Success));
            tracing::debug!("empty source, nothing to execute");
            return RunOutcome::success(transcript.snapshot(), None);
        }

        let sink = CaptureSink::new(transcript, Arc::clone(&self.ids), Arc::clone(&self.console));
        let started = Instant::now();
        tracing::info!(bytes = source.len(), "run started");

        let mut execution = match self.executor.prepare(&sink) {
            Ok(execution) => execution,
            Err(e) => {
                tracing::error!(error = %e, "failed to prepare engine");
                return self.fail(&run_id, &sink, e.into(), started);
            }
        };

        let result = match self.config.run_timeout {
            Some(limit) => tokio::time::timeout(limit, execution.compile_and_run(source))
                .await
                .unwrap_or_else(|_| Err(ScriptError::timeout(limit))),
            None => execution.compile_and_run(source).await,
        };
        let return_value = match result {
            Ok(value) => value,
            Err(e) => return self.fail(&run_id, &sink, e, started),
        };

        self.set_phase(&run_id, RunPhase::Draining);
        tracing::debug!(grace_ms = self.config.grace_period.as_millis() as u64, "draining");
        if let Err(e) = execution.drain(self.config.grace_period).await {
            tracing::error!(error = %e, "event loop failed while draining");
            return self.fail(&run_id, &sink, e.into(), started);
        }
        drop(execution);

        if let Some(value) = &return_value {
            if !sink.produced_output() {
                sink.append(RecordKind::Log, format!("{RETURN_MARKER} {value}"));
            }
        }
        if !sink.produced_output() {
            sink.append(RecordKind::Log, NO_OUTPUT_MESSAGE);
        }

        self.set_phase(&run_id, RunPhase::Settled(Settlement::Success));
        let transcript = sink.transcript().snapshot();
        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            records = transcript.len(),
            "run succeeded"
        );
        RunOutcome::success(transcript, return_value)
    }

    fn fail(
        &self,
        run_id: &RunId,
        sink: &CaptureSink,
        err: ScriptError,
        started: Instant,
    ) -> RunOutcome {
        let report = err.report();
        sink.append_report(&report);
        self.set_phase(run_id, RunPhase::Settled(Settlement::Failed));

        let transcript = sink.transcript().snapshot();
        tracing::info!(
            kind = %report.kind,
            elapsed_ms = started.elapsed().as_millis() as u64,
            records = transcript.len(),
            "run failed"
        );
        RunOutcome::failed(transcript, report)
    }

    /// Empty the active transcript. Does not affect the phase of any run.
    pub fn clear(&self) {
        let cleared = self.active.lock().transcript.reset();
        tracing::debug!(records = cleared.len(), "transcript cleared");
    }

    /// Snapshot of the active transcript.
    pub fn transcript(&self) -> Transcript {
        self.active.lock().transcript.snapshot()
    }

    /// Phase of the most recently started run.
    pub fn phase(&self) -> RunPhase {
        self.active.lock().phase
    }

    fn activate(&self, run_id: &RunId, transcript: SharedTranscript) {
        let mut active = self.active.lock();
        if let Some(previous) = &active.run_id {
            if !active.phase.is_settled() {
                tracing::debug!(previous = %previous.short(8), "superseding unsettled run");
            }
        }
        *active = ActiveRun { run_id: Some(run_id.clone()), transcript, phase: RunPhase::Running };
    }

    /// Only the active run may move the visible phase.
    fn set_phase(&self, run_id: &RunId, phase: RunPhase) {
        let mut active = self.active.lock();
        if active.run_id.as_ref() == Some(run_id) {
            tracing::trace!(from = %active.phase, to = %phase, "phase");
            active.phase = phase;
        }
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

#[cfg(test)]
#[path = "coordinator_tests/mod.rs"]
mod tests;
