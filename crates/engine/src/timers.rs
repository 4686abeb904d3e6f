// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host-side timer queue backing `setTimeout` / `setInterval`.
//!
//! Entries are ordered by `(due, seq)`: timers due at the same instant fire in
//! the order they were scheduled.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use tokio::time::Instant;

/// Script-visible timer id.
pub type TimerHandle = i32;

/// Smallest delay a timer can have, matching browser clamping of `0`.
pub const MIN_DELAY: Duration = Duration::from_millis(1);

/// Largest delay honoured; browsers store delays as a signed 32-bit count of ms.
pub const MAX_DELAY: Duration = Duration::from_millis(i32::MAX as u64);

/// Convert a script-supplied delay in milliseconds into a clamped duration.
///
/// Missing, negative and non-numeric delays become [`MIN_DELAY`].
pub fn clamp_delay(ms: f64) -> Duration {
    if !ms.is_finite() || ms <= 0.0 {
        return MIN_DELAY;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(MAX_DELAY).clamp(MIN_DELAY, MAX_DELAY)
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: BTreeMap<(Instant, u64), TimerHandle>,
    keys: HashMap<TimerHandle, (Instant, u64)>,
    seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `handle` to fire `delay` after `now`, replacing any pending
    /// entry for the same handle.
    pub fn schedule(&mut self, handle: TimerHandle, delay: Duration, now: Instant) {
        self.cancel(handle);
        let Some(due) = now.checked_add(delay) else {
            return;
        };
        self.seq += 1;
        let key = (due, self.seq);
        self.entries.insert(key, handle);
        self.keys.insert(handle, key);
    }

    /// Returns true if the handle was pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.keys.remove(&handle) {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return the earliest timer if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerHandle> {
        let (&key, _) = self.entries.iter().next().filter(|((due, _), _)| *due <= now)?;
        let handle = self.entries.remove(&key)?;
        self.keys.remove(&handle);
        Some(handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.keys.clear();
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod tests;
