// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::time::Duration;

fn millis(var: &str) -> Option<Duration> {
    std::env::var(var).ok().and_then(|s| s.trim().parse::<u64>().ok()).map(Duration::from_millis)
}

/// Grace period override (`JSR_GRACE_MS`).
pub fn grace_period() -> Option<Duration> {
    millis("JSR_GRACE_MS")
}

/// Upper bound on the running phase (`JSR_RUN_TIMEOUT_MS`). `0` disables it.
pub fn run_timeout() -> Option<Option<Duration>> {
    millis("JSR_RUN_TIMEOUT_MS").map(|d| (!d.is_zero()).then_some(d))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
