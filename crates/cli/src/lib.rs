// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation harness for the maximum-of-Gaussians oracle.
//!
//! Streams labeled test cases through an [`oracle::Oracle`], folds the
//! absolute location, spread and odds errors into per-cardinality
//! [`stats::StreamingStats`], and judges the worst bounds against a target
//! significance.
//!
#![doc = include_str!("../README.md")]

pub mod cli;
pub mod group;
pub mod judge;
pub mod oracle;
pub mod output_diagnostic;
pub mod report;
pub mod run;
pub mod stats;
pub mod testcase;

/// Process exit codes
pub mod exit_codes {
    /// Every error bound met the target significance
    pub const ACCEPTED: i32 = 0;
    /// The test statistic exceeded the target significance
    pub const REJECTED: i32 = 1;
    /// Input, oracle or I/O failure; no verdict was produced
    pub const ERROR: i32 = 2;
}
