// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normal distribution primitives.

use std::f64::consts::SQRT_2;

use crate::PdfMaxError;

/// `-ln(sqrt(2 * pi))`
const NEG_LN_SQRT_2PI: f64 = -0.918_938_533_204_672_7;

/// A normal distribution `N(mu, sigma)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    pub mu: f64,
    pub sigma: f64,
}

impl Gaussian {
    pub const fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Cumulative distribution function at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        cdf(x - self.mu, self.sigma)
    }

    /// A zero `sigma` puts all probability on `mu`.
    pub fn is_point_mass(&self) -> bool {
        self.sigma == 0.0
    }

    /// The same distribution moved by `offset`.
    pub(crate) fn shifted(&self, offset: f64) -> Self {
        Self::new(self.mu + offset, self.sigma)
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), PdfMaxError> {
        if self.mu.is_finite() && self.sigma.is_finite() && self.sigma >= 0.0 {
            Ok(())
        } else {
            Err(PdfMaxError::Component {
                index,
                mu: self.mu,
                sigma: self.sigma,
            })
        }
    }
}

impl From<(f64, f64)> for Gaussian {
    fn from((mu, sigma): (f64, f64)) -> Self {
        Self::new(mu, sigma)
    }
}

/// Cumulative normal distribution with zero mean.
///
/// A zero `sigma` degenerates to the unit step at zero.
pub(crate) fn cdf(x: f64, sigma: f64) -> f64 {
    if sigma == 0.0 {
        return if x >= 0.0 { 1.0 } else { 0.0 };
    }
    0.5 * libm::erfc(-x / (sigma * SQRT_2))
}

/// Cumulative standard normal distribution.
pub(crate) fn cdf1(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// Probability density of the standard normal distribution.
pub(crate) fn pdf1(x: f64) -> f64 {
    (NEG_LN_SQRT_2PI - 0.5 * x * x).exp()
}

#[cfg(test)]
#[path = "gaussian_tests.rs"]
mod tests;
