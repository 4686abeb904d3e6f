// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test(start_paused = true)]
async fn thrown_error_fails_without_draining() {
    let h = setup();
    let started = Instant::now();
    let outcome = h
        .coordinator
        .run("setTimeout(() => console.log('never'), 10); throw new TypeError('bad');")
        .await;

    assert_eq!(started.elapsed(), Duration::ZERO);
    let report = outcome.error.as_ref().unwrap();
    assert_eq!(report.kind, "TypeError");
    assert_eq!(report.message, "bad");
    assert_eq!(outcome.return_value, None);

    let recs = records(&outcome);
    assert_eq!(recs[0], error("❌ TypeError: bad"));
    assert!(recs.iter().all(|(kind, _)| *kind == RecordKind::Error));
    assert_eq!(recs.len(), 1 + report.frames.len());
    for (frame, (_, line)) in report.frames.iter().zip(&recs[1..]) {
        assert_eq!(line, &format!("   {frame}"));
    }
    assert_eq!(h.coordinator.phase(), RunPhase::Settled(Settlement::Failed));
}

#[tokio::test(start_paused = true)]
async fn output_before_the_error_is_kept() {
    let h = setup();
    let outcome = h.coordinator.run("console.log('first'); null.boom;").await;

    let recs = records(&outcome);
    assert_eq!(recs[0], log("first"));
    assert_eq!(recs[1].0, RecordKind::Error);
    assert!(recs[1].1.starts_with("❌ TypeError: "), "got {:?}", recs[1]);
}

#[tokio::test(start_paused = true)]
async fn syntax_error_is_reported() {
    let h = setup();
    let outcome = h.coordinator.run("console.log('x'").await;

    assert_eq!(outcome.error.as_ref().map(|e| e.kind.as_str()), Some("SyntaxError"));
    assert_eq!(outcome.settlement(), Settlement::Failed);
}

#[tokio::test(start_paused = true)]
async fn thrown_string_is_reported_as_error() {
    let h = setup();
    let outcome = h.coordinator.run("throw 'plain';").await;

    assert_eq!(records(&outcome), vec![error("❌ Error: plain")]);
}

#[tokio::test(start_paused = true)]
async fn rejected_await_is_reported() {
    let h = setup();
    let outcome = h.coordinator.run("await Promise.reject(new RangeError('no'));").await;

    assert_eq!(records(&outcome)[0], error("❌ RangeError: no"));
}

#[tokio::test(start_paused = true)]
async fn unresolvable_await_stalls() {
    let h = setup();
    let outcome = h.coordinator.run("await new Promise(() => {});").await;

    assert_eq!(outcome.error.as_ref().map(|e| e.kind.as_str()), Some("StalledError"));
}

#[tokio::test(start_paused = true)]
async fn run_timeout_bounds_the_running_phase() {
    let h = setup_with(RunConfig::default().run_timeout(Duration::from_millis(500)));
    let started = Instant::now();
    let outcome = h
        .coordinator
        .run("setInterval(() => {}, 100); await new Promise(() => {});")
        .await;

    assert_eq!(started.elapsed(), Duration::from_millis(500));
    assert_eq!(
        records(&outcome),
        vec![error("❌ TimeoutError: run did not settle within 500ms")]
    );
}

#[tokio::test(start_paused = true)]
async fn uncaught_timer_exception_does_not_fail_the_run() {
    let h = setup();
    let outcome = h
        .coordinator
        .run("setTimeout(() => { throw new Error('late'); }, 10); return 1;")
        .await;

    assert!(outcome.is_success());
    assert_eq!(records(&outcome), vec![error("Uncaught Error: late")]);
}

#[tokio::test(start_paused = true)]
async fn failed_run_leaves_coordinator_ready() {
    let h = setup();
    h.coordinator.run("throw new Error('x');").await;
    let outcome = h.coordinator.run("console.log('again');").await;

    assert_eq!(records(&outcome), vec![log("again")]);
    assert_eq!(h.coordinator.phase(), RunPhase::Settled(Settlement::Success));
}

#[tokio::test(start_paused = true)]
async fn thrown_error_records_stack_frames() {
    let h = setup();
    let outcome = h.coordinator.run("function f() { throw new TypeError('bad'); }\nf();").await;

    let recs = records(&outcome);
    assert!(recs.len() >= 2, "expected frame records, got {recs:?}");
    assert!(recs.len() <= 1 + jsr_core::MAX_FRAMES);
    assert_eq!(recs[0], error("❌ TypeError: bad"));
    assert!(recs[1].1.starts_with("   at "), "got {:?}", recs[1]);
    assert!(recs[1..].iter().all(|(kind, _)| *kind == RecordKind::Error));
}
