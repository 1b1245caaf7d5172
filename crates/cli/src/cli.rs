// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Validate the maximum-of-Gaussians oracle against reference test cases
#[derive(Parser, Clone, Debug)]
#[command(name = "pdfmax-check", version)]
#[command(about = "Validate pdfmax results against reference test cases")]
pub struct Cli {
    /// Required significance, in (0, 1]; used as the oracle's precision and
    /// as the acceptance bound
    #[arg(value_name = "SIGNIFICANCE", value_parser = parse_significance)]
    pub significance: f64,

    /// Read test cases from a file instead of stdin
    #[arg(long, short = 'i', env = "PDFMAX_CHECK_INPUT")]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text", env = "PDFMAX_CHECK_FORMAT")]
    pub format: OutputFormat,

    /// Print the errors of every test case to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table
    #[default]
    Text,
    /// Pretty-printed JSON summary
    Json,
}

/// Parse a significance in `(0, 1]`.
pub fn parse_significance(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(format!("significance must be in (0, 1], got {}", s))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
