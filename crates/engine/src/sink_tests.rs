// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::console::{ConsoleCall, FakeConsole};
use jsr_core::test_support::{error, log, warn};
use jsr_core::SequentialIdGen;
use rquickjs::{Context, Runtime};

fn sink_with(console: FakeConsole) -> CaptureSink {
    CaptureSink::new(
        SharedTranscript::new(),
        Arc::new(SequentialIdGen::new("rec")),
        Arc::new(console),
    )
}

/// Install `sink` into a fresh context and evaluate `script` there.
fn eval_with(sink: &CaptureSink, script: &str) {
    let rt = Runtime::new().unwrap();
    let ctx = Context::full(&rt).unwrap();
    ctx.with(|ctx| {
        sink.install(&ctx).unwrap();
        ctx.eval::<(), _>(script).unwrap();
    });
}

fn entries(sink: &CaptureSink) -> Vec<(RecordKind, String)> {
    sink.transcript()
        .snapshot()
        .entries()
        .into_iter()
        .map(|(kind, msg)| (kind, msg.to_string()))
        .collect()
}

#[test]
fn captures_each_method_with_normalized_kind() {
    let sink = sink_with(FakeConsole::new());
    eval_with(
        &sink,
        "console.log('a'); console.info('b'); console.warn('c'); console.error('d');",
    );

    assert_eq!(entries(&sink), vec![log("a"), log("b"), warn("c"), error("d")]);
}

#[test]
fn joins_arguments_with_single_space() {
    let sink = sink_with(FakeConsole::new());
    eval_with(&sink, "console.log('sum:', 1 + 2, true);");

    assert_eq!(entries(&sink), vec![log("sum: 3 true")]);
}

#[yare::parameterized(
    undefined = { "undefined", "undefined" },
    null = { "null", "null" },
    number = { "1.5", "1.5" },
    boolean = { "false", "false" },
    bigint = { "10n", "10" },
    symbol = { "Symbol('s')", "Symbol(s)" },
    error = { "new RangeError('too far')", "RangeError: too far" },
    array = { "[1, 2]", "[\n  1,\n  2\n]" },
    object = { "({ a: 1 })", "{\n  \"a\": 1\n}" },
    empty_object = { "({})", "{}" },
)]
fn renders_arguments(expr: &str, expected: &str) {
    let sink = sink_with(FakeConsole::new());
    eval_with(&sink, &format!("console.log({expr});"));

    assert_eq!(entries(&sink), vec![log(expected)]);
}

#[test]
fn cyclic_object_falls_back_to_string_form() {
    let sink = sink_with(FakeConsole::new());
    eval_with(&sink, "const o = {}; o.self = o; console.log(o);");

    assert_eq!(entries(&sink), vec![log("[object Object]")]);
}

#[test]
fn forwards_rendered_arguments_to_console() {
    let console = FakeConsole::new();
    let sink = sink_with(console.clone());
    eval_with(&sink, "console.info('x', 2); console.error('y');");

    assert_eq!(
        console.calls(),
        vec![
            ConsoleCall { method: ConsoleMethod::Info, args: vec!["x".into(), "2".into()] },
            ConsoleCall { method: ConsoleMethod::Error, args: vec!["y".into()] },
        ]
    );
}

#[test]
fn install_is_idempotent() {
    let sink = sink_with(FakeConsole::new());
    let rt = Runtime::new().unwrap();
    let ctx = Context::full(&rt).unwrap();
    ctx.with(|ctx| {
        sink.install(&ctx).unwrap();
        sink.install(&ctx).unwrap();
        ctx.eval::<(), _>("console.log('once');").unwrap();
    });

    assert!(sink.is_installed());
    assert_eq!(entries(&sink), vec![log("once")]);
}

#[test]
fn produced_flag_tracks_captures() {
    let sink = sink_with(FakeConsole::new());
    assert!(!sink.produced_output());

    eval_with(&sink, "1 + 1;");
    assert!(!sink.produced_output());

    sink.capture(ConsoleMethod::Warn, &["late".to_string()]);
    assert!(sink.produced_output());
}

#[test]
fn record_ids_come_from_generator() {
    let sink = sink_with(FakeConsole::new());
    eval_with(&sink, "console.log('a'); console.log('b');");

    let ids: Vec<_> = sink.transcript().snapshot().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["rec-1", "rec-2"]);
}

#[test]
fn report_uncaught_appends_error_record() {
    let console = FakeConsole::new();
    let sink = sink_with(console.clone());
    sink.report_uncaught(&ErrorReport::new("TypeError", "nope"));

    assert_eq!(entries(&sink), vec![error("Uncaught TypeError: nope")]);
    assert!(sink.produced_output());
    assert_eq!(console.calls().len(), 1);
}

#[test]
fn append_report_writes_header_and_frames() {
    let sink = sink_with(FakeConsole::new());
    let report = ErrorReport::with_stack(
        "TypeError",
        "bad",
        Some("    at <anonymous> (<input>:1)\n\n    at run (<input>:3)\n    at main\n"),
    );
    sink.append_report(&report);

    assert_eq!(
        entries(&sink),
        vec![
            error("❌ TypeError: bad"),
            error("   at <anonymous> (<input>:1)"),
            error("   at run (<input>:3)"),
        ]
    );
    assert!(sink.produced_output());
}

#[test]
fn sinks_do_not_share_transcripts() {
    let first = sink_with(FakeConsole::new());
    let second = sink_with(FakeConsole::new());
    first.append(RecordKind::Log, "one");

    assert_eq!(first.transcript().len(), 1);
    assert!(second.transcript().is_empty());
}
