// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adaptive Simpson integration for the maximum of three or more Gaussians.
//!
//! The density of `max(X_i)` is `sum_i pdf_i(x) * prod_{j != i} cdf_j(x)`.
//! Over an interval `[a, b]` the term for `i` integrates to approximately
//! `(cdf_i(b) - cdf_i(a)) * prod_{j != i} S_j`, where `S_j` is the Simpson
//! average of `cdf_j` over the interval. Intervals are bisected until the
//! linear interpolation error of all CDFs at the midpoint drops below the
//! requested significance.
//!
//! Components with zero sigma are point masses. Their jump is not seen by the
//! interval sums, so each one contributes an exact atom instead.

use crate::{Gaussian, MaxEstimate};

/// Bisection depth at which an interval is accepted regardless of its error.
const MAX_DEPTH: u32 = 60;

pub(crate) fn max_of_many(components: &[Gaussian], significance: f64) -> MaxEstimate {
    let n = components.len();

    // Relative size of the integration range so the tails left out stay
    // below the significance.
    let k = (2.0 + ((n as f64).ln() - significance.ln()) / 5.0).max(1.0);

    let mut lower = f64::NEG_INFINITY;
    let mut upper = f64::NEG_INFINITY;
    let mut center = f64::NEG_INFINITY;
    for component in components {
        let k_sigma = k * component.sigma;
        lower = lower.max(component.mu - k_sigma);
        upper = upper.max(component.mu + k_sigma);
        center = center.max(component.mu);
    }

    // Shift by -center to reduce the error of the second moment.
    let shifted: Vec<Gaussian> = components.iter().map(|c| c.shifted(-center)).collect();

    let mut integrator = Integrator::new(shifted, significance);

    // Pre-splitting at the largest mean avoids trivial early termination caused
    // by the point symmetry of the CDF around each mean.
    let left = integrator.interval(lower - center, 0.0, 0);
    let right = integrator.interval(0.0, upper - center, 0);
    integrator.push(right);
    integrator.push(left);
    integrator.run();
    integrator.add_point_masses();

    integrator.finish(center)
}

struct Interval {
    lo: f64,
    hi: f64,
    cdf_lo: Vec<f64>,
    cdf_hi: Vec<f64>,
    depth: u32,
}

struct Integrator {
    components: Vec<Gaussian>,
    significance: f64,
    pending: Vec<Interval>,
    /// Zeroth, first and second moment of the (shifted) maximum
    moments: [f64; 3],
    odds: Vec<f64>,
    segments: usize,
}

impl Integrator {
    fn new(components: Vec<Gaussian>, significance: f64) -> Self {
        let n = components.len();
        Self {
            components,
            significance,
            pending: Vec::new(),
            moments: [0.0; 3],
            odds: vec![0.0; n],
            segments: 0,
        }
    }

    fn cdfs_at(&self, x: f64) -> Vec<f64> {
        self.components.iter().map(|c| c.cdf(x)).collect()
    }

    fn interval(&self, lo: f64, hi: f64, depth: u32) -> Interval {
        Interval {
            lo,
            hi,
            cdf_lo: self.cdfs_at(lo),
            cdf_hi: self.cdfs_at(hi),
            depth,
        }
    }

    fn push(&mut self, interval: Interval) {
        self.pending.push(interval);
    }

    /// Depth-first over the pending intervals, left halves first.
    fn run(&mut self) {
        while let Some(interval) = self.pending.pop() {
            let mid = 0.5 * (interval.lo + interval.hi);
            let cdf_mid = self.cdfs_at(mid);

            // The sum is a good estimate of 1 - prod(1 - e) for small errors.
            let error: f64 = interval
                .cdf_lo
                .iter()
                .zip(&interval.cdf_hi)
                .zip(&cdf_mid)
                .map(|((a, b), m)| (0.5 * (a + b) - m).abs())
                .sum();

            if error < self.significance || interval.depth >= MAX_DEPTH {
                self.accumulate(&interval, &cdf_mid, mid);
                continue;
            }

            let depth = interval.depth + 1;
            self.pending.push(Interval {
                lo: mid,
                hi: interval.hi,
                cdf_lo: cdf_mid.clone(),
                cdf_hi: interval.cdf_hi,
                depth,
            });
            self.pending.push(Interval {
                lo: interval.lo,
                hi: mid,
                cdf_lo: interval.cdf_lo,
                cdf_hi: cdf_mid,
                depth,
            });
        }
    }

    fn accumulate(&mut self, interval: &Interval, cdf_mid: &[f64], mid: f64) {
        let n = self.components.len();

        // Simpson's rule for the average of each CDF over the interval
        let simpson: Vec<f64> = (0..n)
            .map(|i| (interval.cdf_lo[i] + 4.0 * cdf_mid[i] + interval.cdf_hi[i]) / 6.0)
            .collect();

        // prod_{j != i} S_j from prefix and suffix products, so a vanishing
        // S_i cannot poison the other terms.
        let mut suffix = vec![1.0; n + 1];
        for i in (0..n).rev() {
            suffix[i] = suffix[i + 1] * simpson[i];
        }

        let mut prefix = 1.0;
        let mut mass = 0.0;
        for i in 0..n {
            if !self.components[i].is_point_mass() {
                let p = (interval.cdf_hi[i] - interval.cdf_lo[i]) * prefix * suffix[i + 1];
                self.odds[i] += p;
                mass += p;
            }
            prefix *= simpson[i];
        }

        self.add_mass(mass, mid);
        self.segments += 1;
    }

    /// Adds `P(max == mu_i)` for every point mass `i`. Point masses sharing a
    /// location split their atom evenly.
    fn add_point_masses(&mut self) {
        for i in 0..self.components.len() {
            let atom = &self.components[i];
            if !atom.is_point_mass() {
                continue;
            }
            let x = atom.mu;

            let mut ties = 0usize;
            let mut below = 1.0;
            for other in &self.components {
                if other.is_point_mass() && other.mu == x {
                    ties += 1;
                } else {
                    below *= other.cdf(x);
                }
            }

            let p = below / ties as f64;
            self.odds[i] += p;
            self.add_mass(p, x);
        }
    }

    fn add_mass(&mut self, mass: f64, at: f64) {
        self.moments[0] += mass;
        self.moments[1] += mass * at;
        self.moments[2] += mass * at * at;
    }

    fn finish(self, center: f64) -> MaxEstimate {
        let [m0, m1, m2] = self.moments;
        let mean = m1 / m0;
        // M0 falls short of 1 by the truncated tails, so the second moment is
        // normalized by it like the mean is.
        let variance = (m2 / m0 - mean * mean).max(0.0);

        MaxEstimate {
            mu: mean + center,
            sigma: variance.sqrt(),
            odds: self.odds.into_iter().map(|o| o / m0).collect(),
            segments: self.segments,
        }
    }
}

#[cfg(test)]
#[path = "integrate_tests.rs"]
mod tests;
