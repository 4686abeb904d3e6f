// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! `run` returns `ExitError` instead of calling `std::process::exit()`, so
//! `main()` alone decides how the process ends.

use std::fmt;

/// The script ran and settled as failed.
pub const EXIT_FAILED: i32 = 1;

/// Bad arguments, unreadable input or configuration.
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    /// Failed run; the error is already part of the printed transcript.
    pub fn failed() -> Self {
        Self::new(EXIT_FAILED, String::new())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
