// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Labeled test cases, one JSON object per input line.
//!
//! ```json
//! {"input": [{"mu": 1.0, "sigma": 1.0}, {"mu": 0.75, "sigma": 0.25}],
//!  "expect": {"mu": 1.29826, "sigma": 0.67643, "odds": [0.59582, 0.40418]}}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::oracle::Estimate;

/// Errors raised while reading a test case
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("line {line}: invalid test case: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: input has no components")]
    EmptyInput { line: usize },

    #[error("line {line}: expected {expected} odds for {expected} components, got {actual}")]
    OddsLength {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: non-finite value in {field}")]
    NonFinite { line: usize, field: &'static str },
}

/// One Gaussian of the input mixture.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Component {
    pub mu: f64,
    pub sigma: f64,
}

/// Reference values for a mixture.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expectation {
    pub mu: f64,
    pub sigma: f64,
    pub odds: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TestCase {
    pub input: Vec<Component>,
    pub expect: Expectation,
}

/// Absolute errors of one oracle evaluation against its reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseErrors {
    pub cardinality: usize,
    pub location: f64,
    pub spread: f64,
    pub odds: Vec<f64>,
}

impl CaseErrors {
    /// Largest odds error, zero when there are none.
    pub fn worst_odds(&self) -> f64 {
        self.odds.iter().copied().fold(0.0, f64::max)
    }
}

impl TestCase {
    /// Parse and validate one input line. `line` is 1-based and only used in
    /// error messages.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, CaseError> {
        let case: TestCase =
            serde_json::from_str(text).map_err(|source| CaseError::Json { line, source })?;
        case.validate(line)?;
        Ok(case)
    }

    fn validate(&self, line: usize) -> Result<(), CaseError> {
        if self.input.is_empty() {
            return Err(CaseError::EmptyInput { line });
        }
        if self.expect.odds.len() != self.input.len() {
            return Err(CaseError::OddsLength {
                line,
                expected: self.input.len(),
                actual: self.expect.odds.len(),
            });
        }
        if !self
            .input
            .iter()
            .all(|c| c.mu.is_finite() && c.sigma.is_finite())
        {
            return Err(CaseError::NonFinite {
                line,
                field: "input",
            });
        }
        let expect = &self.expect;
        if !(expect.mu.is_finite()
            && expect.sigma.is_finite()
            && expect.odds.iter().all(|o| o.is_finite()))
        {
            return Err(CaseError::NonFinite {
                line,
                field: "expect",
            });
        }
        Ok(())
    }

    /// Number of components in the input mixture.
    pub fn cardinality(&self) -> usize {
        self.input.len()
    }

    /// Absolute errors of `estimate` against the expected values.
    pub fn errors(&self, estimate: &Estimate) -> CaseErrors {
        CaseErrors {
            cardinality: self.cardinality(),
            location: (estimate.mu - self.expect.mu).abs(),
            spread: (estimate.sigma - self.expect.sigma).abs(),
            odds: estimate
                .odds
                .iter()
                .zip(&self.expect.odds)
                .map(|(odds, reference)| (odds - reference).abs())
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "testcase_tests.rs"]
mod tests;
