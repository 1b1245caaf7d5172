// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reduction of grouped error statistics into a pass/fail verdict.
//!
//! Each error category of each group contributes `(mean, mean + 3 sigma, max)`.
//! These are maximized across groups per category, then across categories.
//! The test statistic is the smaller of the worst `mean + 3 sigma` and the
//! worst `max`, so a run passes when either bound meets the target.

use serde::Serialize;

use crate::exit_codes;
use crate::group::{ErrorGroup, GroupRegistry};
use crate::stats::StreamingStats;

/// Conservative error bounds of one error category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub mean: f64,
    pub mean_3_sigma: f64,
    pub max: f64,
}

impl Bounds {
    /// Identity for [`Bounds::merge`].
    pub const NONE: Bounds = Bounds {
        mean: f64::NEG_INFINITY,
        mean_3_sigma: f64::NEG_INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub fn of(stats: &StreamingStats) -> Self {
        let moments = stats.summarize();
        Self {
            mean: moments.mean,
            mean_3_sigma: moments.mean_plus_3_sigma(),
            max: stats.max(),
        }
    }

    /// Component-wise maximum.
    pub fn merge(self, other: Bounds) -> Bounds {
        Bounds {
            mean: self.mean.max(other.mean),
            mean_3_sigma: self.mean_3_sigma.max(other.mean_3_sigma),
            max: self.max.max(other.max),
        }
    }
}

/// Bounds for the location, spread and odds errors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CategoryBounds {
    pub location: Bounds,
    pub spread: Bounds,
    pub odds: Bounds,
}

impl CategoryBounds {
    pub const NONE: CategoryBounds = CategoryBounds {
        location: Bounds::NONE,
        spread: Bounds::NONE,
        odds: Bounds::NONE,
    };

    pub fn of(group: &ErrorGroup) -> Self {
        Self {
            location: Bounds::of(&group.location),
            spread: Bounds::of(&group.spread),
            odds: Bounds::of(&group.odds),
        }
    }

    /// Category-wise maximum.
    pub fn merge(self, other: CategoryBounds) -> CategoryBounds {
        CategoryBounds {
            location: self.location.merge(other.location),
            spread: self.spread.merge(other.spread),
            odds: self.odds.merge(other.odds),
        }
    }

    /// Maximum over the three categories.
    pub fn worst(&self) -> Bounds {
        self.location.merge(self.spread).merge(self.odds)
    }
}

/// One report row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupRow {
    pub cardinality: usize,
    pub bounds: CategoryBounds,
    pub cases: u64,
    pub odds_samples: u64,
}

/// Everything the report needs, derived from a registry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub groups: Vec<GroupRow>,
    /// Category-wise maxima across groups
    pub totals: CategoryBounds,
    pub cases: u64,
    pub odds_samples: u64,
    /// Maxima across categories of `totals`
    pub worst: Bounds,
    pub target: f64,
    /// `min(worst.mean_3_sigma, worst.max)`, `None` when there were no cases
    pub test_statistic: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        self == Verdict::Accept
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Accept => exit_codes::ACCEPTED,
            Verdict::Reject => exit_codes::REJECTED,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accept => write!(f, "OK"),
            Verdict::Reject => write!(f, "FAILED"),
        }
    }
}

/// Verdict plus the summary it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Judgement {
    pub verdict: Verdict,
    pub summary: Summary,
}

/// Decides whether the observed errors meet a target significance.
pub struct SignificanceJudge;

impl SignificanceJudge {
    /// Reduce `registry` and compare against `target`.
    ///
    /// An empty registry is rejected: no cases means no evidence.
    pub fn judge(registry: &GroupRegistry, target: f64) -> Judgement {
        let groups: Vec<GroupRow> = registry
            .iter()
            .map(|(cardinality, group)| GroupRow {
                cardinality,
                bounds: CategoryBounds::of(group),
                cases: group.case_count(),
                odds_samples: group.odds_count(),
            })
            .collect();

        let totals = groups
            .iter()
            .fold(CategoryBounds::NONE, |acc, row| acc.merge(row.bounds));
        let worst = totals.worst();

        let test_statistic = if registry.is_empty() {
            None
        } else {
            Some(worst.mean_3_sigma.min(worst.max))
        };

        let verdict = match test_statistic {
            Some(statistic) if statistic <= target => Verdict::Accept,
            _ => Verdict::Reject,
        };

        Judgement {
            verdict,
            summary: Summary {
                groups,
                totals,
                cases: registry.case_count(),
                odds_samples: registry.odds_count(),
                worst,
                target,
                test_statistic,
            },
        }
    }
}

#[cfg(test)]
#[path = "judge_tests.rs"]
mod tests;
