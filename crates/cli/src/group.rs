// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error statistics grouped by test-case cardinality.

use std::collections::BTreeMap;

use crate::stats::StreamingStats;

/// The three error accumulators kept for one cardinality.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorGroup {
    /// |mu - reference mu|, one sample per case
    pub location: StreamingStats,
    /// |sigma - reference sigma|, one sample per case
    pub spread: StreamingStats,
    /// |odds_i - reference odds_i|, one sample per component
    pub odds: StreamingStats,
}

impl ErrorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cases folded into this group.
    pub fn case_count(&self) -> u64 {
        self.location.count()
    }

    /// Number of odds errors folded into this group.
    pub fn odds_count(&self) -> u64 {
        self.odds.count()
    }
}

/// Per-run mapping from cardinality to its [`ErrorGroup`].
///
/// Groups are created on first use and iterate in ascending cardinality.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupRegistry {
    groups: BTreeMap<usize, ErrorGroup>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the errors of one case into the group for `cardinality`.
    pub fn record_case(
        &mut self,
        cardinality: usize,
        location_error: f64,
        spread_error: f64,
        odds_errors: &[f64],
    ) {
        let group = self.groups.entry(cardinality).or_default();
        group.location.add(location_error);
        group.spread.add(spread_error);
        for &error in odds_errors {
            group.odds.add(error);
        }
    }

    pub fn get(&self, cardinality: usize) -> Option<&ErrorGroup> {
        self.groups.get(&cardinality)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ErrorGroup)> {
        self.groups.iter().map(|(&n, group)| (n, group))
    }

    /// Number of distinct cardinalities seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of cases across all groups.
    pub fn case_count(&self) -> u64 {
        self.groups.values().map(ErrorGroup::case_count).sum()
    }

    /// Total number of odds errors across all groups.
    pub fn odds_count(&self) -> u64 {
        self.groups.values().map(ErrorGroup::odds_count).sum()
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
