// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failing scripts and bad input

use crate::prelude::*;

#[test]
fn thrown_error_exits_one_with_error_records() {
    cli()
        .eval("console.log('before'); throw new TypeError('bad');")
        .fails()
        .stdout_has("[log]   before\n")
        .stdout_has("[error] ❌ TypeError: bad");
}

#[test]
fn syntax_error_exits_one() {
    cli().eval("console.log(").fails().stdout_has("❌ SyntaxError");
}

#[test]
fn thrown_string_is_reported_as_error() {
    cli().eval("throw 'plain';").fails().stdout_eq("[error] ❌ Error: plain\n");
}

#[test]
fn unresolvable_await_is_reported() {
    cli().eval("await new Promise(() => {});").fails().stdout_has("❌ StalledError");
}

#[test]
fn timeout_flag_bounds_long_runs() {
    cli()
        .args(&["--timeout-ms", "200"])
        .eval("setInterval(() => {}, 50); await new Promise(() => {});")
        .fails()
        .stdout_has("❌ TimeoutError: run did not settle within 200ms");
}

#[test]
fn missing_file_exits_two() {
    cli().args(&["/nonexistent/script.js"]).exits(2).stderr_has("/nonexistent/script.js");
}
