// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod errors;
mod grace;
mod ordering;
mod overlap;

use super::*;
use crate::console::FakeConsole;
use jsr_core::test_support::{entries, error, log, warn};
use jsr_core::SequentialIdGen;
use std::time::Duration;

struct TestHarness {
    coordinator: Coordinator,
    console: FakeConsole,
}

fn setup() -> TestHarness {
    setup_with(RunConfig::default())
}

fn setup_with(config: RunConfig) -> TestHarness {
    let console = FakeConsole::new();
    let coordinator = Coordinator::new(config)
        .with_console(console.clone())
        .with_ids(SequentialIdGen::new("rec"));
    TestHarness { coordinator, console }
}

/// Owned `(kind, message)` pairs of an outcome.
fn records(outcome: &RunOutcome) -> Vec<(RecordKind, String)> {
    entries(&outcome.transcript)
}
