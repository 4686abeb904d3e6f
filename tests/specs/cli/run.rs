// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running scripts from each source

use crate::prelude::*;

#[test]
fn eval_prints_logs_in_order() {
    cli()
        .eval("console.log('x'); console.warn('y'); console.info('z');")
        .passes()
        .stdout_eq("[log]   x\n[warn]  y\n[log]   z\n");
}

#[test]
fn blank_input_warns_and_succeeds() {
    cli().eval("   ").passes().stdout_eq("[warn]  // No code to execute\n");
}

#[test]
fn return_value_is_shown_when_nothing_was_logged() {
    cli().eval("return 6 * 7;").passes().stdout_eq("[log]   → 42\n");
}

#[test]
fn silent_script_reports_success() {
    cli()
        .eval("let a = 1;")
        .passes()
        .stdout_eq("[log]   ✅ Code executed successfully (no output)\n");
}

#[test]
fn reads_script_file() {
    let project = Project::empty();
    project.file("hello.js", "console.log('from file');");

    project
        .jsr()
        .args(&["--grace-ms", FAST_GRACE, "hello.js"])
        .passes()
        .stdout_eq("[log]   from file\n");
}

#[test]
fn reads_stdin_by_default() {
    cli()
        .args(&["--grace-ms", FAST_GRACE])
        .stdin("console.log('piped');")
        .passes()
        .stdout_eq("[log]   piped\n");
}

#[test]
fn dash_reads_stdin() {
    cli()
        .args(&["--grace-ms", FAST_GRACE, "-"])
        .stdin("console.error('e');")
        .passes()
        .stdout_eq("[error] e\n");
}

#[test]
fn deferred_output_inside_grace_is_printed_last() {
    cli()
        .args(&["--grace-ms", "500"])
        .args(&["--eval", "setTimeout(() => console.log('later'), 100); console.log('now');"])
        .passes()
        .stdout_eq("[log]   now\n[log]   later\n");
}

#[test]
fn deferred_output_after_grace_is_lost() {
    cli()
        .args(&["--grace-ms", "100"])
        .args(&["--eval", "setTimeout(() => console.log('too late'), 2000); console.log('now');"])
        .passes()
        .stdout_lacks("too late");
}

#[test]
fn hello_example_runs() {
    cli()
        .args(&["--grace-ms", FAST_GRACE, "--example", "hello"])
        .passes()
        .stdout_eq("[log]   Hello, World!\n[log]   Welcome to the JavaScript compiler!\n");
}

#[test]
fn async_example_collects_all_timers() {
    cli()
        .args(&["--grace-ms", "1500", "--example", "async"])
        .passes()
        .stdout_has("🚀 Starting async operations...")
        .stdout_has("📋 Final result: Async function finished")
        .stdout_has("⏰ setTimeout: 1000ms completed");
}
