// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine.
//!
//! [`EngineError`] covers host-side failures (engine construction, native
//! bindings). [`ScriptError`] is what a script raised; it is reported as
//! data in the transcript, never propagated out of a run.

use std::time::Duration;

use jsr_core::ErrorReport;
use thiserror::Error;

/// Failures of the embedding itself.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine error: {0}")]
    Engine(#[from] rquickjs::Error),

    /// A host binding script threw while being installed or invoked.
    #[error("binding failed: {0}")]
    Binding(String),
}

/// Error raised by user code, or synthesized when a run cannot complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ScriptError {
    /// Error class name, e.g. `SyntaxError`.
    pub kind: String,
    pub message: String,
    pub stack: Option<String>,
}

impl ScriptError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>, stack: Option<String>) -> Self {
        Self { kind: kind.into(), message: message.into(), stack }
    }

    /// The top-level body is suspended but nothing is left that could resume it.
    pub fn stalled() -> Self {
        Self::new(
            "StalledError",
            "top-level await can never settle: no timers or jobs are pending",
            None,
        )
    }

    pub fn timeout(limit: Duration) -> Self {
        Self::new(
            "TimeoutError",
            format!("run did not settle within {}ms", limit.as_millis()),
            None,
        )
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::with_stack(&self.kind, &self.message, self.stack.as_deref())
    }
}

impl From<EngineError> for ScriptError {
    fn from(err: EngineError) -> Self {
        Self::new("InternalError", err.to_string(), None)
    }
}

/// Errors loading a run configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
