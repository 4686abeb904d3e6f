// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test(start_paused = true)]
async fn deferred_output_within_grace_is_captured_last() {
    let h = setup();
    let outcome = h
        .coordinator
        .run("console.log('now'); setTimeout(() => console.log('later'), 300);")
        .await;

    assert_eq!(records(&outcome), vec![log("now"), log("later")]);
}

#[tokio::test(start_paused = true)]
async fn grace_boundary_999_vs_1001() {
    let h = setup();
    let outcome = h
        .coordinator
        .run(
            "setTimeout(() => console.log('999'), 999);
             setTimeout(() => console.log('1001'), 1001);",
        )
        .await;

    assert_eq!(records(&outcome), vec![log("999")]);
}

#[tokio::test(start_paused = true)]
async fn only_late_output_still_counts_as_no_output() {
    let h = setup();
    let outcome = h.coordinator.run("setTimeout(() => console.log('lost'), 1001); return 5;").await;

    assert_eq!(records(&outcome), vec![log("→ 5")]);
}

#[tokio::test(start_paused = true)]
async fn successful_run_waits_the_grace_period() {
    let h = setup();
    let started = Instant::now();
    h.coordinator.run("console.log('x');").await;

    assert_eq!(started.elapsed(), Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn grace_period_is_configurable() {
    let h = setup_with(RunConfig::default().grace_period(Duration::from_millis(100)));
    let started = Instant::now();
    let outcome = h
        .coordinator
        .run(
            "setTimeout(() => console.log('in'), 50);
             setTimeout(() => console.log('out'), 150);",
        )
        .await;

    assert_eq!(started.elapsed(), Duration::from_millis(100));
    assert_eq!(records(&outcome), vec![log("in")]);
}

#[tokio::test(start_paused = true)]
async fn phase_moves_through_draining() {
    let h = setup();
    assert_eq!(h.coordinator.phase(), RunPhase::Idle);

    let run = h.coordinator.run("setTimeout(() => {}, 10);");
    let observe = async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        h.coordinator.phase()
    };
    let (outcome, mid) = tokio::join!(run, observe);

    assert_eq!(mid, RunPhase::Draining);
    assert!(outcome.is_success());
    assert_eq!(h.coordinator.phase(), RunPhase::Settled(Settlement::Success));
}

#[tokio::test(start_paused = true)]
async fn unrepresentable_grace_period_still_settles() {
    let h = setup_with(RunConfig::default().grace_period(Duration::from_millis(u64::MAX)));
    let outcome = h
        .coordinator
        .run("console.log('x'); setTimeout(() => console.log('late'), 5000);")
        .await;

    assert!(outcome.is_success());
    assert_eq!(records(&outcome), vec![log("x"), log("late")]);
    assert_eq!(h.coordinator.phase(), RunPhase::Settled(Settlement::Success));
}
