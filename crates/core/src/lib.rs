// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jsr-core: data model shared by the jsr engine and its front ends

pub mod macros;

pub mod id;
pub mod outcome;
pub mod record;
pub mod run;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use id::{short, IdGen, SequentialIdGen, UuidIdGen};
pub use outcome::{
    stack_frames, ErrorReport, RunOutcome, RunPhase, Settlement, ERROR_MARKER, MAX_FRAMES,
    NO_CODE_MESSAGE, NO_OUTPUT_MESSAGE, RETURN_MARKER,
};
pub use record::{OutputRecord, RecordKind, SharedTranscript, Transcript, UnknownRecordKind};
pub use run::RunId;
