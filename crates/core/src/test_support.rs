// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{RecordKind, Transcript};

/// Proptest strategies for core types.
pub mod strategies {
    use crate::RecordKind;
    use proptest::prelude::*;

    pub fn arb_record_kind() -> impl Strategy<Value = RecordKind> {
        prop_oneof![Just(RecordKind::Log), Just(RecordKind::Warn), Just(RecordKind::Error)]
    }

    /// Printable console messages without line breaks.
    pub fn arb_message() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 _.,:-]{0,24}"
    }
}

/// Owned `(kind, message)` pairs of a transcript.
pub fn entries(transcript: &Transcript) -> Vec<(RecordKind, String)> {
    transcript.iter().map(|r| (r.kind, r.message.clone())).collect()
}

/// Messages of a transcript, in order.
pub fn messages(transcript: &Transcript) -> Vec<String> {
    transcript.iter().map(|r| r.message.clone()).collect()
}

/// Shorthand for building expected `(kind, message)` lists.
pub fn log(message: &str) -> (RecordKind, String) {
    (RecordKind::Log, message.to_string())
}

pub fn warn(message: &str) -> (RecordKind, String) {
    (RecordKind::Warn, message.to_string())
}

pub fn error(message: &str) -> (RecordKind, String) {
    (RecordKind::Error, message.to_string())
}
