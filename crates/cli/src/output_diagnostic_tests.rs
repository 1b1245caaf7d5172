// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "line 3: input has no components", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: line 3: input has no components\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "oracle failed", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[31mError: oracle failed\x1b[0m\n");
}

#[test]
fn warning_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "no test cases", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Warning: no test cases\n");
}

#[test]
fn warning_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "no test cases", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[33mWarning: no test cases\x1b[0m\n");
}

#[test]
fn note_plain_and_dimmed() {
    let mut buf = Vec::new();
    write_note(&mut buf, format_args!("{} cases", 3), false);
    assert_eq!(String::from_utf8(buf).unwrap(), "Note: 3 cases\n");

    let mut buf = Vec::new();
    write_note(&mut buf, "done", true);
    assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[2mNote: done\x1b[0m\n");
}

#[test]
fn describe_case_line() {
    let errors = CaseErrors {
        cardinality: 3,
        location: 1.5e-4,
        spread: 0.0,
        odds: vec![1e-6, 2e-5, 3e-6],
    };
    assert_eq!(
        describe_case(7, &errors),
        "line 7: n=3 mu err 1.500e-4, sigma err 0.000e0, odds err 2.000e-5"
    );
}
