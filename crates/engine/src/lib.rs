// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jsr-engine: captures the console output of JavaScript runs
//!
//! [`Coordinator::run`] executes one script in a fresh QuickJS context and
//! returns its [`RunOutcome`](jsr_core::RunOutcome).

pub mod config;
pub mod console;
pub mod coordinator;
pub mod env;
pub mod error;
pub mod executor;
pub mod sink;
pub mod timers;

pub use config::{RunConfig, DEFAULT_GRACE_PERIOD};
pub use console::{Console, ConsoleMethod, TracingConsole};
pub use coordinator::Coordinator;
pub use error::{ConfigError, EngineError, ScriptError};
pub use executor::{Execution, ScriptExecutor};
pub use sink::CaptureSink;
pub use timers::{TimerHandle, TimerQueue};

#[cfg(any(test, feature = "test-support"))]
pub use console::{ConsoleCall, FakeConsole};
