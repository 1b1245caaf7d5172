// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_registry_is_empty() {
    let registry = GroupRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert_eq!(registry.case_count(), 0);
    assert!(registry.get(2).is_none());
}

#[test]
fn test_two_cases_same_cardinality() {
    let mut registry = GroupRegistry::new();
    registry.record_case(2, 1e-6, 2e-6, &[1e-7, 3e-7]);
    registry.record_case(2, 3e-6, 4e-6, &[2e-7, 4e-7]);

    assert_eq!(registry.len(), 1);
    let group = registry.get(2).unwrap();
    assert_eq!(group.location.count(), 2);
    assert_eq!(group.spread.count(), 2);
    assert_eq!(group.odds.count(), 4);
    assert_eq!(group.case_count(), 2);
    assert_eq!(group.odds_count(), 4);
    assert_eq!(group.location.max(), 3e-6);
    assert_eq!(group.odds.min(), 1e-7);
}

#[test]
fn test_groups_created_lazily_per_cardinality() {
    let mut registry = GroupRegistry::new();
    registry.record_case(3, 0.0, 0.0, &[0.0, 0.0, 0.0]);
    registry.record_case(1, 0.0, 0.0, &[0.0]);
    registry.record_case(3, 0.0, 0.0, &[0.0, 0.0, 0.0]);

    assert_eq!(registry.len(), 2);
    let keys: Vec<usize> = registry.iter().map(|(n, _)| n).collect();
    assert_eq!(keys, vec![1, 3]);
    assert_eq!(registry.case_count(), 3);
    assert_eq!(registry.odds_count(), 7);
}

#[test]
fn test_case_without_odds() {
    let mut registry = GroupRegistry::new();
    registry.record_case(4, 0.5, 0.25, &[]);

    let group = registry.get(4).unwrap();
    assert_eq!(group.case_count(), 1);
    assert!(group.odds.is_empty());
}

proptest! {
    #[test]
    fn counts_follow_cases(cardinalities in prop::collection::vec(1usize..6, 0..100)) {
        let mut registry = GroupRegistry::new();
        for &n in &cardinalities {
            registry.record_case(n, 0.1, 0.2, &vec![0.3; n]);
        }

        for (n, group) in registry.iter() {
            let cases = cardinalities.iter().filter(|&&c| c == n).count() as u64;
            prop_assert_eq!(group.location.count(), cases);
            prop_assert_eq!(group.spread.count(), cases);
            prop_assert_eq!(group.odds.count(), cases * n as u64);
        }
        prop_assert_eq!(registry.case_count(), cardinalities.len() as u64);
    }
}
