// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn jsr_help_shows_usage_and_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--eval")
        .stdout_has("--grace-ms")
        .stdout_has("--example");
}

#[test]
fn jsr_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn unknown_example_is_a_usage_error() {
    cli().args(&["--example", "nope"]).exits(2);
}

#[test]
fn eval_and_file_conflict() {
    cli().args(&["a.js", "--eval", "1"]).exits(2);
}
