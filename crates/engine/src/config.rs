// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! Layering, lowest to highest: built-in defaults, an optional TOML file,
//! environment variables (see [`crate::env`]), then explicit setters.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default wait after a successful body for deferred output to arrive.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed wall-clock wait in the draining phase.
    pub grace_period: Duration,
    /// Upper bound on the running phase; `None` waits as long as timers can
    /// still make progress.
    pub run_timeout: Option<Duration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { grace_period: DEFAULT_GRACE_PERIOD, run_timeout: None }
    }
}

/// On-disk form: `grace_ms = 1000`, `timeout_ms = 5000`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRunConfig {
    grace_ms: Option<u64>,
    timeout_ms: Option<u64>,
}

impl RunConfig {
    jsr_core::setters! {
        set { grace_period: Duration }
        option { run_timeout: Duration }
    }

    pub fn without_timeout(mut self) -> Self {
        self.run_timeout = None;
        self
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    pub fn with_env(mut self) -> Self {
        if let Some(grace) = crate::env::grace_period() {
            self.grace_period = grace;
        }
        if let Some(timeout) = crate::env::run_timeout() {
            self.run_timeout = timeout;
        }
        self
    }

    /// Apply the settings of a TOML document on top of `self`.
    pub fn with_toml(mut self, text: &str) -> Result<Self, ConfigError> {
        let raw: RawRunConfig = toml::from_str(text)?;
        if let Some(ms) = raw.grace_ms {
            self.grace_period = Duration::from_millis(ms);
        }
        if let Some(ms) = raw.timeout_ms {
            self.run_timeout = (ms > 0).then(|| Duration::from_millis(ms));
        }
        Ok(self)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::default().with_toml(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
