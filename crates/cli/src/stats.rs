// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass accumulator for error statistics.
//!
//! Sums are kept relative to a location offset `z` so that compact clusters of
//! samples far from zero do not lose precision to cancellation. The offset is
//! taken from the first sample, moved to the midpoint of the first two, and
//! frozen from then on.
//!
//! The two-sample warm-up sets the sum of squares to `x * x / 2` without
//! folding in the earlier state. This is not an exact incremental variance:
//! for `{1, 3}` it reports a variance of 2.25 where the population variance
//! is 1.0.

use serde::Serialize;

/// Mean, standard deviation and standard error of the mean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Moments {
    pub mean: f64,
    pub sigma: f64,
    pub standard_error: f64,
}

impl Moments {
    /// Upper bound assuming near-normal errors: `mean + 3 sigma`.
    pub fn mean_plus_3_sigma(&self) -> f64 {
        self.mean + 3.0 * self.sigma
    }
}

/// Streaming accumulator of mean, variance, min and max.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamingStats {
    /// Location offset
    z: f64,
    sum: f64,
    sum_sq: f64,
    n: u64,
    min: f64,
    max: f64,
}

impl StreamingStats {
    pub fn new() -> Self {
        Self {
            z: 0.0,
            sum: 0.0,
            sum_sq: 0.0,
            n: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add one sample.
    pub fn add(&mut self, x: f64) {
        match self.n {
            0 => {
                self.z = x;
                self.sum = 0.0;
                self.sum_sq = 0.0;
            }
            1 => {
                // Move closer to the center of the distribution
                self.z = 0.5 * (self.z + x);
                self.sum_sq = 0.5 * x * x;
            }
            _ => {
                let xz = x - self.z;
                self.sum += xz;
                self.sum_sq += xz * xz;
            }
        }
        self.n += 1;
        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    /// Mean, sigma and standard error of the samples seen so far.
    ///
    /// Round-off can push the variance slightly below zero; it is clamped.
    pub fn summarize(&self) -> Moments {
        if self.n == 0 {
            return Moments {
                mean: self.z,
                sigma: 0.0,
                standard_error: 0.0,
            };
        }
        let n = self.n as f64;
        let mean = self.sum / n + self.z;
        let variance = ((self.sum_sq - self.sum * self.sum / n) / n).max(0.0);
        let sigma = variance.sqrt();
        Moments {
            mean,
            sigma,
            standard_error: sigma / n.sqrt(),
        }
    }

    pub fn count(&self) -> u64 {
        self.n
    }

    /// Smallest sample, `+inf` when empty.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample, `-inf` when empty.
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl Default for StreamingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StreamingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.summarize();
        write!(
            f,
            "{:.15} +/- {:.15} [{}]",
            s.mean, s.standard_error, self.n
        )
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
