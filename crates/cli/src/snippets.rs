// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in example scripts (`jsr --example NAME`).

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Snippet {
    /// Two plain log lines
    Hello,
    /// `for` loop and array iteration
    Loop,
    /// Functions, arrows and structured values
    Function,
    /// Timers, promises and async functions
    Async,
}

impl Snippet {
    pub fn source(self) -> &'static str {
        match self {
            Snippet::Hello => include_str!("snippets/hello.js"),
            Snippet::Loop => include_str!("snippets/loop.js"),
            Snippet::Function => include_str!("snippets/function.js"),
            Snippet::Async => include_str!("snippets/async.js"),
        }
    }
}

#[cfg(test)]
#[path = "snippets_tests.rs"]
mod tests;
