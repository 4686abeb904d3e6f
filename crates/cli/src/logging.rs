// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup using `tracing-subscriber`.
//!
//! The filter comes from `JSR_LOG` (same syntax as `RUST_LOG`). Logs go to
//! stderr; stdout carries only the transcript.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "JSR_LOG";

/// Script output forwarded to the console is hidden unless asked for.
pub const DEFAULT_FILTER: &str = "warn,jsr::console=off";

pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("global subscriber already set");
    }
}
