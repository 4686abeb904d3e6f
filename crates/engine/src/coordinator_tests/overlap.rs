// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test(start_paused = true)]
async fn clear_then_blank_run_yields_only_the_warning() {
    let h = setup();
    h.coordinator.run("console.log('old');").await;
    assert_eq!(entries(&h.coordinator.transcript()), vec![log("old")]);

    h.coordinator.clear();
    assert!(h.coordinator.transcript().is_empty());

    let outcome = h.coordinator.run("").await;
    assert_eq!(records(&outcome), vec![warn(NO_CODE_MESSAGE)]);
    assert_eq!(entries(&h.coordinator.transcript()), vec![warn(NO_CODE_MESSAGE)]);
}

#[tokio::test(start_paused = true)]
async fn new_run_replaces_the_active_transcript() {
    let h = setup();
    h.coordinator.run("console.log('one');").await;
    h.coordinator.run("console.log('two');").await;

    assert_eq!(entries(&h.coordinator.transcript()), vec![log("two")]);
}

#[tokio::test(start_paused = true)]
async fn clear_during_drain_keeps_later_output() {
    let h = setup();
    let run = h
        .coordinator
        .run("console.log('early'); setTimeout(() => console.log('late'), 500);");
    let clear = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        h.coordinator.clear();
    };
    let (outcome, ()) = tokio::join!(run, clear);

    assert_eq!(records(&outcome), vec![log("late")]);
    assert_eq!(h.coordinator.phase(), RunPhase::Settled(Settlement::Success));
}

#[tokio::test(start_paused = true)]
async fn late_output_stays_with_the_run_that_scheduled_it() {
    let h = setup();
    let first = h
        .coordinator
        .run("console.log('first'); setTimeout(() => console.log('first late'), 500);");
    let second = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        h.coordinator.run("console.log('second');").await
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(records(&first), vec![log("first"), log("first late")]);
    assert_eq!(records(&second), vec![log("second")]);
    assert_eq!(entries(&h.coordinator.transcript()), vec![log("second")]);
}

#[tokio::test(start_paused = true)]
async fn superseded_run_does_not_move_the_phase() {
    let h = setup();
    let first = h.coordinator.run("setTimeout(() => {}, 10);");
    let second = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        h.coordinator.run("throw new Error('second');").await
    };
    let (first, second) = tokio::join!(first, second);

    assert!(first.is_success());
    assert!(!second.is_success());
    assert_eq!(h.coordinator.phase(), RunPhase::Settled(Settlement::Failed));
}
