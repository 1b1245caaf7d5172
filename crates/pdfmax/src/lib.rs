// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fast maximum of multiple Gaussians.
//!
//! Given independent normal variables `X_i ~ N(mu_i, sigma_i)`, [`pdf_max`]
//! returns a Gaussian that preserves the first two moments of `max(X_i)`,
//! together with the odds that each `X_i` is the maximum.
//!
//! - One component is returned as is.
//! - Two components use Clark's exact formula and ignore the significance.
//! - Three or more components are integrated numerically; the significance
//!   bounds the per-interval interpolation error of the integration.

mod clark;
mod error;
mod gaussian;
mod integrate;

pub use error::PdfMaxError;
pub use gaussian::Gaussian;

/// Distribution of the maximum and the per-component odds of being the maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct MaxEstimate {
    /// Mean of the maximum
    pub mu: f64,
    /// Standard deviation of the maximum
    pub sigma: f64,
    /// Odds that each input is the maximum, one per input component
    pub odds: Vec<f64>,
    /// Number of integration segments used (0 means an exact result)
    pub segments: usize,
}

impl MaxEstimate {
    /// Sum of all odds; should be close to one.
    pub fn odds_sum(&self) -> f64 {
        self.odds.iter().sum()
    }

    /// Whether the estimate came from a closed-form formula.
    pub fn is_exact(&self) -> bool {
        self.segments == 0
    }

    fn ensure_finite(self) -> Result<Self, PdfMaxError> {
        let finite = self.mu.is_finite()
            && self.sigma.is_finite()
            && self.odds.iter().all(|o| o.is_finite());
        if finite {
            Ok(self)
        } else {
            Err(PdfMaxError::NonFinite)
        }
    }
}

/// Compute the maximum of several Gaussians.
///
/// `significance` must lie in `(0, 1]`. Below roughly `5e-12` the numerical
/// integration for three or more components becomes slow and unstable.
pub fn pdf_max(components: &[Gaussian], significance: f64) -> Result<MaxEstimate, PdfMaxError> {
    if components.is_empty() {
        return Err(PdfMaxError::Empty);
    }
    if significance.is_nan() || significance <= 0.0 || significance > 1.0 {
        return Err(PdfMaxError::Significance(significance));
    }
    for (index, component) in components.iter().enumerate() {
        component.validate(index)?;
    }

    let estimate = match components {
        [single] => MaxEstimate {
            mu: single.mu,
            sigma: single.sigma,
            odds: vec![1.0],
            segments: 0,
        },
        [first, second] => clark::max_of_two(*first, *second),
        _ => integrate::max_of_many(components, significance),
    };
    estimate.ensure_finite()
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
