// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The oracle under validation.
//!
//! The harness only talks to the oracle through [`Oracle::evaluate`]; the
//! default implementation forwards to the `pdfmax` crate.

use pdfmax::{pdf_max, Gaussian, PdfMaxError};
use serde::Serialize;
use thiserror::Error;

use crate::testcase::Component;

/// Errors raised by an oracle evaluation
#[derive(Debug, Error)]
pub enum OracleError {
    #[error(transparent)]
    PdfMax(#[from] PdfMaxError),

    #[error("oracle returned {actual} odds for {expected} components")]
    OddsLength { expected: usize, actual: usize },

    #[error("oracle returned a non-finite result")]
    NonFinite,
}

/// Combined location, spread and per-component odds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub mu: f64,
    pub sigma: f64,
    pub odds: Vec<f64>,
}

impl Estimate {
    /// Check the shape and finiteness of an oracle result.
    pub fn check(self, components: usize) -> Result<Self, OracleError> {
        if self.odds.len() != components {
            return Err(OracleError::OddsLength {
                expected: components,
                actual: self.odds.len(),
            });
        }
        let finite = self.mu.is_finite()
            && self.sigma.is_finite()
            && self.odds.iter().all(|o| o.is_finite());
        if !finite {
            return Err(OracleError::NonFinite);
        }
        Ok(self)
    }
}

/// Predicts the maximum of a Gaussian mixture at a requested significance.
pub trait Oracle {
    fn evaluate(&self, components: &[Component], significance: f64)
        -> Result<Estimate, OracleError>;
}

/// [`Oracle`] backed by [`pdfmax::pdf_max`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfMaxOracle;

impl Oracle for PdfMaxOracle {
    fn evaluate(
        &self,
        components: &[Component],
        significance: f64,
    ) -> Result<Estimate, OracleError> {
        let gaussians: Vec<Gaussian> = components
            .iter()
            .map(|c| Gaussian::new(c.mu, c.sigma))
            .collect();
        let result = pdf_max(&gaussians, significance)?;
        Ok(Estimate {
            mu: result.mu,
            sigma: result.sigma,
            odds: result.odds,
        })
    }
}

impl<O: Oracle + ?Sized> Oracle for &O {
    fn evaluate(
        &self,
        components: &[Component],
        significance: f64,
    ) -> Result<Estimate, OracleError> {
        (**self).evaluate(components, significance)
    }
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod tests;
