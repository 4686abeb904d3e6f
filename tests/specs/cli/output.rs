// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON and colored output

use crate::prelude::*;

#[test]
fn json_output_has_transcript_and_return_value() {
    let run = cli().args(&["-o", "json"]).eval("return { n: 1 };").passes();
    let value = run.json();

    assert_eq!(value["transcript"][0]["kind"], "log");
    assert_eq!(value["transcript"][0]["message"], "→ {\n  \"n\": 1\n}");
    assert_eq!(value["return_value"], "{\n  \"n\": 1\n}");
    assert!(value["error"].is_null());
}

#[test]
fn json_output_for_failures_includes_report() {
    let run = cli().args(&["-o", "json"]).eval("throw new RangeError('r');").fails();
    let value = run.json();

    assert_eq!(value["error"]["kind"], "RangeError");
    assert_eq!(value["error"]["message"], "r");
    assert!(value["error"]["frames"].as_array().unwrap().len() <= 2);
}

#[test]
fn record_ids_are_unique() {
    let run = cli().args(&["-o", "json"]).eval("console.log(1); console.log(2);").passes();
    let value = run.json();
    let records = value["transcript"].as_array().unwrap();

    assert_eq!(records.len(), 2);
    assert_ne!(records[0]["id"], records[1]["id"]);
}

#[test]
fn color_forced_tags_records() {
    cli()
        .env("NO_COLOR", "0")
        .env("COLOR", "1")
        .eval("console.warn('w');")
        .passes()
        .stdout_has("\x1b[38;5;179m[warn] \x1b[0m w");
}
