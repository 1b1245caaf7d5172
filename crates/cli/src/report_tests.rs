// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::group::GroupRegistry;
use crate::judge::SignificanceJudge;
use yare::parameterized;

const ZEROS: &str = "  0.000000000000 0.000000000000 0.000000000000";

fn judged(cases: &[(usize, f64, f64, Vec<f64>)], target: f64) -> Judgement {
    let mut registry = GroupRegistry::new();
    for (n, location, spread, odds) in cases {
        registry.record_case(*n, *location, *spread, odds);
    }
    SignificanceJudge::judge(&registry, target)
}

#[parameterized(
    millis = { 1e-3, "1.00e-03" },
    rounding = { 9.999e-4, "1.00e-03" },
    tiny = { 2.5e-12, "2.50e-12" },
    large = { 12345.0, "1.23e+04" },
    one = { 1.0, "1.00e+00" },
    zero = { 0.0, "0.00e+00" },
    three_digits = { 1e-100, "1.00e-100" },
)]
fn scientific_matches_c_format(value: f64, expected: &str) {
    assert_eq!(scientific(value), expected);
}

#[test]
fn test_scientific_non_finite() {
    assert_eq!(scientific(f64::NEG_INFINITY), "-inf");
}

#[test]
fn test_text_report_layout() {
    let text = render_text(&judged(&[(1, 0.0, 0.0, vec![0.0])], 1e-3));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert!(lines[0]
        .starts_with("  n  Mu err avg     Mu err m3s     Mu err max      Sigma err avg"));
    assert!(lines[0].ends_with(" counts"));
    assert!(lines[1].starts_with("---  --------------"));
    assert_eq!(lines[2], format!("  1{}{}{} 1 1", ZEROS, ZEROS, ZEROS));
    assert_eq!(lines[3], lines[1]);
    assert_eq!(lines[4], format!("max{}{}{} 1 1", ZEROS, ZEROS, ZEROS));
    assert_eq!(
        lines[5],
        format!("   {}", "  0.001000000000 0.001000000000 0.001000000000".repeat(3))
    );
    assert_eq!(lines[6], "Needed significance: 1.00e-03");
    assert_eq!(lines[7], "Result significance: 0.00e+00");
    assert_eq!(lines[8], "Test result: OK");
}

#[test]
fn test_text_report_columns_align() {
    let text = render_text(&judged(&[(2, 1e-4, 2e-4, vec![1e-5, 2e-5])], 1e-3));
    let lines: Vec<&str> = text.lines().collect();
    // Header, divider and rows share the same width
    assert_eq!(lines[0].len() - " counts".len(), lines[2].len() - " 1 2".len());
    assert_eq!(lines[1].len() - 13, lines[0].len() - " counts".len());
}

#[test]
fn test_failed_verdict_rendered() {
    let text = render_text(&judged(&[(3, 0.5, 0.0, vec![0.0; 3])], 1e-3));
    assert!(text.contains("Result significance: 5.00e-01\n"));
    assert!(text.ends_with("Test result: FAILED\n"));
}

#[test]
fn test_empty_report() {
    let text = render_text(&judged(&[], 1e-3));
    assert!(text.contains("max  -inf -inf -inf"));
    assert!(text.contains("Result significance: n/a\n"));
    assert!(text.ends_with("Test result: FAILED\n"));
}

#[test]
fn test_rows_sorted_by_cardinality() {
    let text = render_text(&judged(
        &[
            (5, 0.0, 0.0, vec![0.0; 5]),
            (2, 0.0, 0.0, vec![0.0; 2]),
        ],
        1e-3,
    ));
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[2].starts_with("  2  "));
    assert!(lines[3].starts_with("  5  "));
}

#[test]
fn test_json_report() {
    let judgement = judged(&[(2, 1e-4, 0.0, vec![1e-5, 1e-5])], 1e-3);
    let mut buf = Vec::new();
    write_report(&mut buf, &judgement, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["verdict"], "accept");
    assert_eq!(value["summary"]["target"], 1e-3);
    assert_eq!(value["summary"]["cases"], 1);
    assert_eq!(value["summary"]["odds_samples"], 2);
    assert_eq!(value["summary"]["groups"][0]["cardinality"], 2);
    assert_eq!(value["summary"]["groups"][0]["bounds"]["location"]["max"], 1e-4);
    assert_eq!(value["summary"]["test_statistic"], 1e-4);
}

#[test]
fn test_write_text_report() {
    let judgement = judged(&[(1, 0.0, 0.0, vec![0.0])], 1e-3);
    let mut buf = Vec::new();
    write_report(&mut buf, &judgement, OutputFormat::Text).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), render_text(&judgement));
}
