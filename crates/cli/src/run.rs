// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One validation run: stream cases through the oracle into the registry.

use std::io::BufRead;

use thiserror::Error;

use crate::group::GroupRegistry;
use crate::judge::{Judgement, SignificanceJudge};
use crate::oracle::{Oracle, OracleError};
use crate::testcase::{CaseError, CaseErrors, TestCase};

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Case(#[from] CaseError),

    #[error("line {line}: oracle failed: {source}")]
    Oracle {
        line: usize,
        #[source]
        source: OracleError,
    },
}

/// State of one validation run.
///
/// The registry is owned by the run, so separate runs never share statistics.
pub struct ValidationRun<O> {
    oracle: O,
    significance: f64,
    registry: GroupRegistry,
}

impl<O: Oracle> ValidationRun<O> {
    pub fn new(oracle: O, significance: f64) -> Self {
        Self {
            oracle,
            significance,
            registry: GroupRegistry::new(),
        }
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    /// Number of cases recorded so far.
    pub fn case_count(&self) -> u64 {
        self.registry.case_count()
    }

    /// Evaluate one case and fold its errors into the registry.
    ///
    /// Nothing is recorded when the oracle fails.
    pub fn record_case(&mut self, case: &TestCase, line: usize) -> Result<CaseErrors, RunError> {
        let estimate = self
            .oracle
            .evaluate(&case.input, self.significance)
            .and_then(|estimate| estimate.check(case.cardinality()))
            .map_err(|source| RunError::Oracle { line, source })?;

        let errors = case.errors(&estimate);
        self.registry.record_case(
            errors.cardinality,
            errors.location,
            errors.spread,
            &errors.odds,
        );
        Ok(errors)
    }

    /// Consume every line of `reader`, skipping blank lines.
    ///
    /// `on_case` sees the line number and errors of each recorded case.
    /// Stops at the first malformed line or oracle failure.
    pub fn consume<R, F>(&mut self, reader: R, mut on_case: F) -> Result<u64, RunError>
    where
        R: BufRead,
        F: FnMut(usize, &CaseErrors),
    {
        let mut consumed = 0;
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let text = line?;
            if text.trim().is_empty() {
                continue;
            }
            let case = TestCase::parse_line(&text, line_no)?;
            let errors = self.record_case(&case, line_no)?;
            on_case(line_no, &errors);
            consumed += 1;
        }
        Ok(consumed)
    }

    /// Judge the statistics collected so far.
    pub fn judge(&self) -> Judgement {
        SignificanceJudge::judge(&self.registry, self.significance)
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
