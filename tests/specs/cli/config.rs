// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file and environment

use crate::prelude::*;

const LATE_LOG: &str = "setTimeout(() => console.log('late'), 300); console.log('now');";

#[test]
fn config_file_sets_grace_period() {
    let project = Project::empty();
    project.file("jsr.toml", "grace_ms = 600\n");

    project
        .jsr()
        .args(&["--config", "jsr.toml", "--eval", LATE_LOG])
        .passes()
        .stdout_eq("[log]   now\n[log]   late\n");
}

#[test]
fn environment_sets_grace_period() {
    cli()
        .env("JSR_GRACE_MS", "50")
        .args(&["--eval", LATE_LOG])
        .passes()
        .stdout_lacks("late");
}

#[test]
fn flag_beats_environment() {
    cli()
        .env("JSR_GRACE_MS", "50")
        .args(&["--grace-ms", "600", "--eval", LATE_LOG])
        .passes()
        .stdout_has("late");
}

#[test]
fn invalid_config_file_exits_two() {
    let project = Project::empty();
    project.file("jsr.toml", "grace = 1\n");

    project
        .jsr()
        .args(&["--config", "jsr.toml", "--eval", "1"])
        .exits(2)
        .stderr_has("invalid config");
}
