// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The real output device behind the capture sink.
//!
//! Every intercepted `console.*` call is forwarded to a [`Console`] after it
//! has been recorded, so developers still see script output in the host's
//! own log stream.

use std::str::FromStr;

use jsr_core::RecordKind;

/// The four intercepted logging entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Log,
    Info,
    Warn,
    Error,
}

jsr_core::simple_display! {
    ConsoleMethod {
        Log => "log",
        Info => "info",
        Warn => "warn",
        Error => "error",
    }
}

impl ConsoleMethod {
    /// Record kind for this method; `info` is normalized to `Log`.
    pub fn kind(self) -> RecordKind {
        match self {
            ConsoleMethod::Log | ConsoleMethod::Info => RecordKind::Log,
            ConsoleMethod::Warn => RecordKind::Warn,
            ConsoleMethod::Error => RecordKind::Error,
        }
    }
}

impl FromStr for ConsoleMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(ConsoleMethod::Log),
            "info" => Ok(ConsoleMethod::Info),
            "warn" => Ok(ConsoleMethod::Warn),
            "error" => Ok(ConsoleMethod::Error),
            other => Err(format!("unknown console method: {other}")),
        }
    }
}

/// Output capability with the shape of the script-side `console`.
pub trait Console: Send + Sync + 'static {
    fn log(&self, args: &[String]);
    fn info(&self, args: &[String]);
    fn warn(&self, args: &[String]);
    fn error(&self, args: &[String]);

    fn forward(&self, method: ConsoleMethod, args: &[String]) {
        match method {
            ConsoleMethod::Log => self.log(args),
            ConsoleMethod::Info => self.info(args),
            ConsoleMethod::Warn => self.warn(args),
            ConsoleMethod::Error => self.error(args),
        }
    }
}

/// Forwards script output as `tracing` events on target `jsr::console`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log(&self, args: &[String]) {
        tracing::info!(target: "jsr::console", "{}", args.join(" "));
    }

    fn info(&self, args: &[String]) {
        tracing::info!(target: "jsr::console", method = "info", "{}", args.join(" "));
    }

    fn warn(&self, args: &[String]) {
        tracing::warn!(target: "jsr::console", "{}", args.join(" "));
    }

    fn error(&self, args: &[String]) {
        tracing::error!(target: "jsr::console", "{}", args.join(" "));
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ConsoleCall, FakeConsole};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Console, ConsoleMethod};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded forwarded call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ConsoleCall {
        pub method: ConsoleMethod,
        pub args: Vec<String>,
    }

    /// Fake console for testing
    #[derive(Clone, Default)]
    pub struct FakeConsole {
        calls: Arc<Mutex<Vec<ConsoleCall>>>,
    }

    impl FakeConsole {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all forwarded calls
        pub fn calls(&self) -> Vec<ConsoleCall> {
            self.calls.lock().clone()
        }

        fn record(&self, method: ConsoleMethod, args: &[String]) {
            self.calls.lock().push(ConsoleCall { method, args: args.to_vec() });
        }
    }

    impl Console for FakeConsole {
        fn log(&self, args: &[String]) {
            self.record(ConsoleMethod::Log, args);
        }

        fn info(&self, args: &[String]) {
            self.record(ConsoleMethod::Info, args);
        }

        fn warn(&self, args: &[String]) {
            self.record(ConsoleMethod::Warn, args);
        }

        fn error(&self, args: &[String]) {
            self.record(ConsoleMethod::Error, args);
        }
    }
}
