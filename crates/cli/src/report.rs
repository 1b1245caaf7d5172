// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of a [`Judgement`].

use std::io::Write;

use crate::cli::OutputFormat;
use crate::judge::{Bounds, CategoryBounds, Judgement, Summary};

/// Width of one numeric column (`0.` plus 12 decimals)
const COLUMN: usize = 14;

const CATEGORIES: [&str; 3] = ["Mu", "Sigma", "Odds"];

/// Write `judgement` to `writer` in the requested format.
pub fn write_report<W: Write>(
    writer: &mut W,
    judgement: &Judgement,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => writer.write_all(render_text(judgement).as_bytes()),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, judgement)?;
            writeln!(writer)
        }
    }
}

/// Tabular report: one row per cardinality, the maxima, the target, and the
/// verdict.
pub fn render_text(judgement: &Judgement) -> String {
    let summary = &judgement.summary;
    let mut out = String::new();

    out.push_str(&header());
    out.push_str(&divider());

    for row in &summary.groups {
        out.push_str(&format!(
            " {:2}{} {} {}\n",
            row.cardinality,
            bounds_cells(&row.bounds),
            row.cases,
            row.odds_samples
        ));
    }

    out.push_str(&divider());
    out.push_str(&format!(
        "max{} {} {}\n",
        bounds_cells(&summary.totals),
        summary.cases,
        summary.odds_samples
    ));
    out.push_str(&format!("   {}\n", target_cells(summary)));

    out.push_str(&format!(
        "Needed significance: {}\n",
        scientific(summary.target)
    ));
    let result = summary
        .test_statistic
        .map(scientific)
        .unwrap_or_else(|| "n/a".to_string());
    out.push_str(&format!("Result significance: {}\n", result));
    out.push_str(&format!("Test result: {}\n", judgement.verdict));
    out
}

fn header() -> String {
    let mut line = String::from("  n");
    for label in CATEGORIES {
        line.push(' ');
        for stat in ["avg", "m3s", "max"] {
            let title = format!("{} err {}", label, stat);
            line.push_str(&format!(" {:<w$.w$}", title, w = COLUMN));
        }
    }
    line.push_str(" counts\n");
    line
}

fn divider() -> String {
    let dashes = "-".repeat(COLUMN);
    let mut line = String::from("---");
    for _ in CATEGORIES {
        line.push_str(&format!("  {} {} {}", dashes, dashes, dashes));
    }
    line.push(' ');
    line.push_str(&"-".repeat(12));
    line.push('\n');
    line
}

fn cells(bounds: &Bounds) -> String {
    format!(
        "  {:.12} {:.12} {:.12}",
        bounds.mean, bounds.mean_3_sigma, bounds.max
    )
}

/// Location, spread and odds cells, in that order.
fn bounds_cells(bounds: &CategoryBounds) -> String {
    [&bounds.location, &bounds.spread, &bounds.odds]
        .into_iter()
        .map(cells)
        .collect()
}

fn target_cells(summary: &Summary) -> String {
    let target = Bounds {
        mean: summary.target,
        mean_3_sigma: summary.target,
        max: summary.target,
    };
    CATEGORIES.iter().map(|_| cells(&target)).collect()
}

/// Format like C's `%.2e`: two decimals and an exponent of at least two
/// digits, e.g. `1.00e-03`.
pub fn scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.2e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
