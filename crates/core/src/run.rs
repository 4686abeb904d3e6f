// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run identifier.

use crate::{IdGen, UuidIdGen};

crate::define_id! {
    /// Unique identifier for one run of the coordinator.
    ///
    /// Only used to correlate log lines; it never appears in a transcript.
    pub struct RunId;
}

impl RunId {
    pub fn generate() -> Self {
        Self::new(UuidIdGen.next())
    }
}
