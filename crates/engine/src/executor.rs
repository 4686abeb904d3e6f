// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script executor
//!
//! Each [`Execution`] owns a fresh QuickJS runtime and context. The submitted
//! source becomes the body of an async function; the host drives the event
//! loop, draining promise jobs after every callback and firing timers from a
//! [`TimerQueue`] on tokio time.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use jsr_core::ErrorReport;
use rquickjs::convert::Coerced;
use rquickjs::function::Opt;
use rquickjs::{CatchResultExt, Context, Ctx, Function, Object, Persistent, Runtime, Value};
use tokio::time::Instant;

use crate::error::{EngineError, ScriptError};
use crate::sink::{self, binding, CaptureSink};
use crate::timers::{clamp_delay, TimerHandle, TimerQueue};

const RUNTIME_JS: &str = include_str!("js/runtime.js");

type Completion = Rc<RefCell<Option<Result<Option<String>, ScriptError>>>>;

/// Builds executions. Holds no state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptExecutor;

impl ScriptExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Create a fresh engine context with `sink` installed and the event-loop
    /// globals defined.
    pub fn prepare(&self, sink: &CaptureSink) -> Result<Execution, EngineError> {
        let runtime = Runtime::new()?;
        let context = Context::full(&runtime)?;
        let timers = Rc::new(RefCell::new(TimerQueue::new()));
        let completion: Completion = Rc::new(RefCell::new(None));

        let (fire, start) = context.with(|ctx| -> Result<_, EngineError> {
            sink.install(&ctx)?;
            let natives = natives(&ctx, &timers, &completion, sink)?;
            let factory: Function = ctx.eval(RUNTIME_JS).catch(&ctx).map_err(binding)?;
            let loop_fns: Object = factory.call((natives,)).catch(&ctx).map_err(binding)?;
            let fire: Function = loop_fns.get("fire")?;
            let start: Function = loop_fns.get("start")?;
            Ok((Persistent::save(&ctx, fire), Persistent::save(&ctx, start)))
        })?;

        Ok(Execution { fire, start, context, runtime, timers, completion, sink: sink.clone() })
    }
}

/// Host functions handed to the event-loop glue.
fn natives<'js>(
    ctx: &Ctx<'js>,
    timers: &Rc<RefCell<TimerQueue>>,
    completion: &Completion,
    sink: &CaptureSink,
) -> Result<Object<'js>, EngineError> {
    let natives = Object::new(ctx.clone())?;
    natives.set("render", sink::render_function(ctx)?)?;

    let queue = Rc::clone(timers);
    natives.set(
        "schedule",
        Function::new(ctx.clone(), move |id: TimerHandle, delay: f64| {
            queue.borrow_mut().schedule(id, clamp_delay(delay), Instant::now());
        })?,
    )?;

    let queue = Rc::clone(timers);
    natives.set(
        "cancel",
        Function::new(ctx.clone(), move |id: TimerHandle| {
            queue.borrow_mut().cancel(id);
        })?,
    )?;

    let done = Rc::clone(completion);
    natives.set(
        "resolve",
        Function::new(ctx.clone(), move |value: Opt<String>| {
            *done.borrow_mut() = Some(Ok(value.0));
        })?,
    )?;

    let done = Rc::clone(completion);
    natives.set(
        "reject",
        Function::new(ctx.clone(), move |kind: String, message: String, stack: Opt<String>| {
            let stack = stack.0.filter(|s| !s.trim().is_empty());
            *done.borrow_mut() = Some(Err(ScriptError::new(kind, message, stack)));
        })?,
    )?;

    let sink = sink.clone();
    natives.set(
        "uncaught",
        Function::new(ctx.clone(), move |kind: String, message: String, stack: Opt<String>| {
            tracing::debug!(%kind, %message, "uncaught exception in timer callback");
            sink.report_uncaught(&ErrorReport::with_stack(kind, message, stack.0.as_deref()));
        })?,
    )?;

    Ok(natives)
}

/// One run's engine instance.
///
/// Field order is drop order: persistent handles go before the context, and
/// the context before its runtime.
pub struct Execution {
    fire: Persistent<Function<'static>>,
    start: Persistent<Function<'static>>,
    context: Context,
    runtime: Runtime,
    timers: Rc<RefCell<TimerQueue>>,
    completion: Completion,
    sink: CaptureSink,
}

impl Execution {
    /// Compile `source` as an async function body, call it, and drive the
    /// event loop until the returned promise settles.
    ///
    /// Resolves to the rendered return value, `None` for `undefined`.
    pub async fn compile_and_run(&mut self, source: &str) -> Result<Option<String>, ScriptError> {
        self.context.with(|ctx| -> Result<(), EngineError> {
            let start = self.start.clone().restore(&ctx)?;
            start.call::<_, ()>((source,)).catch(&ctx).map_err(binding)
        })?;
        self.run_jobs();

        loop {
            if let Some(result) = self.completion.borrow_mut().take() {
                return result;
            }
            let next = self.timers.borrow().next_due();
            let Some(due) = next else {
                return Err(ScriptError::stalled());
            };
            tokio::time::sleep_until(due).await;
            self.fire_due(Instant::now())?;
        }
    }

    /// Keep firing timers until `grace` has elapsed. Timers still pending
    /// afterwards are dropped with the execution.
    ///
    /// A window too long to represent as an instant has no deadline: it lasts
    /// only while timers remain pending.
    pub async fn drain(&mut self, grace: Duration) -> Result<(), EngineError> {
        let deadline = Instant::now().checked_add(grace);
        if deadline.is_none() {
            tracing::debug!("grace period unbounded, draining until no timers remain");
        }
        loop {
            let next = self.timers.borrow().next_due();
            let due = match (next, deadline) {
                (Some(due), Some(deadline)) if due <= deadline => due,
                (Some(due), None) => due,
                _ => break,
            };
            tokio::time::sleep_until(due).await;
            let now = Instant::now();
            self.fire_due(deadline.map_or(now, |deadline| now.min(deadline)))?;
        }
        if let Some(deadline) = deadline {
            tokio::time::sleep_until(deadline).await;
        }

        let dropped = self.pending_timers();
        if dropped > 0 {
            tracing::debug!(dropped, "discarding timers still pending after grace period");
        }
        Ok(())
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn sink(&self) -> &CaptureSink {
        &self.sink
    }

    fn fire_due(&self, now: Instant) -> Result<(), EngineError> {
        loop {
            let next = self.timers.borrow_mut().pop_due(now);
            let Some(id) = next else {
                return Ok(());
            };
            tracing::trace!(timer = id, "firing timer");
            self.context.with(|ctx| -> Result<(), EngineError> {
                let fire = self.fire.clone().restore(&ctx)?;
                fire.call::<_, ()>((id,)).catch(&ctx).map_err(binding)
            })?;
            self.run_jobs();
        }
    }

    /// Run every pending promise job.
    fn run_jobs(&self) {
        loop {
            match self.runtime.execute_pending_job() {
                Ok(true) => {}
                Ok(false) => break,
                Err(job) => {
                    let report = job.0.with(|ctx| {
                        let value = ctx.catch();
                        exception_report(&value)
                    });
                    self.sink.report_uncaught(&report);
                }
            }
        }
    }
}

fn exception_report(value: &Value<'_>) -> ErrorReport {
    match value.as_exception() {
        Some(exc) => ErrorReport::with_stack(
            exc.get::<_, String>("name").unwrap_or_else(|_| "Error".to_string()),
            exc.message().unwrap_or_default(),
            exc.stack().as_deref(),
        ),
        None => ErrorReport::new(
            "Error",
            value.get::<Coerced<String>>().map(|s| s.0).unwrap_or_default(),
        ),
    }
}

impl std::fmt::Debug for Execution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Execution")
            .field("pending_timers", &self.pending_timers())
            .field("settled", &self.completion.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
