// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clark's exact moments for the maximum of two Gaussians.
//!
//! C. E. Clark, "The Greatest of a Finite Set of Random Variables",
//! Operations Research 9(2), 1961.

use crate::gaussian::{cdf, cdf1, pdf1};
use crate::{Gaussian, MaxEstimate};

pub(crate) fn max_of_two(first: Gaussian, second: Gaussian) -> MaxEstimate {
    let theta = first.sigma.hypot(second.sigma);

    if theta == 0.0 {
        return max_of_two_points(first.mu, second.mu);
    }

    let alpha = (first.mu - second.mu) / theta;
    let p_first = cdf1(alpha);
    let p_second = cdf1(-alpha);
    let density = pdf1(alpha);

    let ex1 = first.mu * p_first + second.mu * p_second + theta * density;
    let ex2 = (first.sigma * first.sigma + first.mu * first.mu) * p_first
        + (second.sigma * second.sigma + second.mu * second.mu) * p_second
        + (first.mu + second.mu) * theta * density;

    // P(first - second > 0)
    let odds_first = cdf(first.mu - second.mu, theta);

    MaxEstimate {
        mu: ex1,
        sigma: (ex2 - ex1 * ex1).max(0.0).sqrt(),
        odds: vec![odds_first, 1.0 - odds_first],
        segments: 0,
    }
}

/// Both inputs are point masses.
fn max_of_two_points(first: f64, second: f64) -> MaxEstimate {
    let odds_first = if first > second {
        1.0
    } else if first < second {
        0.0
    } else {
        0.5
    };
    MaxEstimate {
        mu: first.max(second),
        sigma: 0.0,
        odds: vec![odds_first, 1.0 - odds_first],
        segments: 0,
    }
}

#[cfg(test)]
#[path = "clark_tests.rs"]
mod tests;
