// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output records and the per-run transcript they are appended to.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::IdGen;

/// Severity of a captured record.
///
/// `console.info` has no kind of its own and is normalized to [`RecordKind::Log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Log,
    Warn,
    Error,
}

crate::simple_display! {
    RecordKind {
        Log => "log",
        Warn => "warn",
        Error => "error",
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown record kind: {0}")]
pub struct UnknownRecordKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" | "info" => Ok(RecordKind::Log),
            "warn" => Ok(RecordKind::Warn),
            "error" => Ok(RecordKind::Error),
            other => Err(UnknownRecordKind(other.to_string())),
        }
    }
}

/// One captured or synthesized line of output.
///
/// `id` only lets a consumer key entries; position in the [`Transcript`] is
/// the ordering authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub message: String,
    pub kind: RecordKind,
}

impl OutputRecord {
    pub fn new(ids: &dyn IdGen, kind: RecordKind, message: impl Into<String>) -> Self {
        Self { id: ids.next(), message: message.into(), kind }
    }
}

/// Ordered, append-only sequence of records for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    records: Vec<OutputRecord>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OutputRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputRecord> {
        self.records.iter()
    }

    /// `(kind, message)` pairs, convenient for assertions and rendering.
    pub fn entries(&self) -> Vec<(RecordKind, &str)> {
        self.records.iter().map(|r| (r.kind, r.message.as_str())).collect()
    }

    pub fn into_records(self) -> Vec<OutputRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a OutputRecord;
    type IntoIter = std::slice::Iter<'a, OutputRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Cloneable handle to a transcript shared between a run's sink and its
/// coordinator.
///
/// Appends go through [`SharedTranscript::append`]; the only other mutation
/// is [`SharedTranscript::reset`], which swaps the contents for an empty
/// transcript.
#[derive(Debug, Clone, Default)]
pub struct SharedTranscript {
    inner: Arc<Mutex<Transcript>>,
}

impl SharedTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: OutputRecord) {
        self.inner.lock().push(record);
    }

    pub fn snapshot(&self) -> Transcript {
        self.inner.lock().clone()
    }

    /// Replace the contents with an empty transcript, returning the old one.
    pub fn reset(&self) -> Transcript {
        std::mem::take(&mut *self.inner.lock())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// True when both handles point at the same transcript.
    pub fn same_as(&self, other: &SharedTranscript) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
