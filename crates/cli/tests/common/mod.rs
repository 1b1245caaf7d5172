// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for pdfmax-check integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// A single Gaussian, exact for any significance.
pub const SINGLE: &str = r#"{"input": [{"mu": 0.123, "sigma": 0.456}], "expect": {"mu": 0.123, "sigma": 0.456, "odds": [1.0]}}"#;

/// Two standard normals: E[max] = 1/sqrt(pi), Var[max] = 1 - 1/pi.
pub const PAIR: &str = r#"{"input": [{"mu": 0.0, "sigma": 1.0}, {"mu": 0.0, "sigma": 1.0}], "expect": {"mu": 0.5641895835477563, "sigma": 0.8256452711765563, "odds": [0.5, 0.5]}}"#;

/// Three close Gaussians with a reference evaluated at 1e-12.
pub const TRIPLE: &str = r#"{"input": [{"mu": 0.6412027167691333, "sigma": 0.03163264836021567}, {"mu": 0.6281166488299745, "sigma": 0.013541425967055945}, {"mu": 0.6072673296242264, "sigma": 0.03225156507575445}], "expect": {"mu": 0.6520763702913913, "sigma": 0.022639363053277944, "odds": [0.5838764197399438, 0.27349123682713455, 0.14263234343306277]}}"#;

/// Same mixture as [`PAIR`] with a reference mean that is off by 0.01.
pub const PAIR_OFF: &str = r#"{"input": [{"mu": 0.0, "sigma": 1.0}, {"mu": 0.0, "sigma": 1.0}], "expect": {"mu": 0.5741895835477563, "sigma": 0.8256452711765563, "odds": [0.5, 0.5]}}"#;

/// Join test case lines into one input stream.
pub fn cases(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

/// Write test cases to a temporary `.jsonl` file.
pub fn write_cases(lines: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".jsonl")
        .tempfile()
        .unwrap();
    file.write_all(cases(lines).as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
