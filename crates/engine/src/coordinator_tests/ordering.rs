// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    empty = { "" },
    spaces = { "   " },
    newlines = { "\n\t\n" },
)]
fn blank_source_yields_single_warning(source: &str) {
    let h = setup();
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    let outcome = rt.block_on(h.coordinator.run(source));

    assert_eq!(records(&outcome), vec![warn(NO_CODE_MESSAGE)]);
    assert!(outcome.is_success());
    assert_eq!(h.coordinator.phase(), RunPhase::Settled(Settlement::Success));
    assert!(h.console.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn blank_source_skips_grace_period() {
    let h = setup();
    let started = Instant::now();
    h.coordinator.run("").await;
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn synchronous_logs_keep_call_order() {
    let h = setup();
    let outcome = h.coordinator.run("console.log('x'); console.log('y');").await;

    assert_eq!(records(&outcome), vec![log("x"), log("y")]);
    assert_eq!(outcome.error, None);
    assert_eq!(outcome.return_value, None);
}

#[tokio::test(start_paused = true)]
async fn info_is_recorded_as_log_and_forwarded_as_info() {
    let h = setup();
    let outcome = h.coordinator.run("console.info('i'); console.warn('w');").await;

    assert_eq!(records(&outcome), vec![log("i"), warn("w")]);
    let methods: Vec<_> = h.console.calls().into_iter().map(|c| c.method).collect();
    assert_eq!(methods, vec![crate::console::ConsoleMethod::Info, crate::console::ConsoleMethod::Warn]);
}

#[tokio::test(start_paused = true)]
async fn return_value_without_output_is_synthesized() {
    let h = setup();
    let outcome = h.coordinator.run("return 42;").await;

    assert_eq!(records(&outcome), vec![log("→ 42")]);
    assert_eq!(outcome.return_value.as_deref(), Some("42"));
}

#[tokio::test(start_paused = true)]
async fn return_value_with_output_is_not_synthesized() {
    let h = setup();
    let outcome = h.coordinator.run("console.log('hi'); return 42;").await;

    assert_eq!(records(&outcome), vec![log("hi")]);
    assert_eq!(outcome.return_value.as_deref(), Some("42"));
}

#[tokio::test(start_paused = true)]
async fn structured_return_value_is_rendered() {
    let h = setup();
    let outcome = h.coordinator.run("return { ok: true };").await;

    assert_eq!(records(&outcome), vec![log("→ {\n  \"ok\": true\n}")]);
}

#[tokio::test(start_paused = true)]
async fn silent_run_reports_no_output() {
    let h = setup();
    let outcome = h.coordinator.run("const a = 1 + 1;").await;

    assert_eq!(records(&outcome), vec![log(NO_OUTPUT_MESSAGE)]);
    assert!(outcome.is_success());
}

#[tokio::test(start_paused = true)]
async fn microtasks_then_timers_then_nothing_else() {
    let h = setup();
    let outcome = h
        .coordinator
        .run(
            "setTimeout(() => console.log('3'), 0);
             Promise.resolve().then(() => console.log('2'));
             console.log('1');",
        )
        .await;

    assert_eq!(records(&outcome), vec![log("1"), log("2"), log("3")]);
}

#[tokio::test(start_paused = true)]
async fn top_level_await_interleaves_with_timers() {
    let h = setup();
    let outcome = h
        .coordinator
        .run(
            "setTimeout(() => console.log('timer'), 10);
             console.log('before');
             await new Promise(r => setTimeout(r, 20));
             console.log('after');",
        )
        .await;

    assert_eq!(records(&outcome), vec![log("before"), log("timer"), log("after")]);
}

#[tokio::test(start_paused = true)]
async fn record_ids_are_unique_and_ordered() {
    let h = setup();
    let outcome = h.coordinator.run("console.log('a'); console.error('b');").await;

    let ids: Vec<_> = outcome.transcript.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rec-1", "rec-2"]);
}
