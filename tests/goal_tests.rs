// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use moni::errors::StoreError;
use moni::store::FinanceStore;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn non_positive_target_rejected() {
    let store = FinanceStore::open_in_memory().unwrap();
    for target in ["0", "-100"] {
        let err = store.create_goal("Emergency fund", dec(target)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
    assert!(store.goals().unwrap().is_empty());
}

#[test]
fn empty_name_rejected() {
    let store = FinanceStore::open_in_memory().unwrap();
    let err = store.create_goal("   ", dec("100")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn contribute_validates_amount_and_goal() {
    let store = FinanceStore::open_in_memory().unwrap();
    let id = store.create_goal("Laptop", dec("1200")).unwrap();

    let err = store.contribute(id, dec("0")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    let err = store.contribute(id, dec("-5")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    let err = store.contribute(id + 99, dec("10")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    // None of the failed calls moved the saved amount.
    assert_eq!(store.goals().unwrap()[0].current_amount, Decimal::ZERO);
}

#[test]
fn completion_follows_amounts_after_every_contribution() {
    let store = FinanceStore::open_in_memory().unwrap();
    let id = store.create_goal("Holiday", dec("300")).unwrap();

    store.contribute(id, dec("120")).unwrap();
    let g = &store.goals().unwrap()[0];
    assert_eq!(g.current_amount, dec("120"));
    assert!(!g.is_completed);

    store.contribute(id, dec("180")).unwrap();
    let g = &store.goals().unwrap()[0];
    assert_eq!(g.current_amount, dec("300"));
    assert!(g.is_completed);

    // Over-funding is allowed and stays completed.
    store.contribute(id, dec("50")).unwrap();
    let g = &store.goals().unwrap()[0];
    assert_eq!(g.current_amount, dec("350"));
    assert!(g.is_completed);
}

#[test]
fn active_and_completed_partition_preserves_order() {
    let store = FinanceStore::open_in_memory().unwrap();
    let a = store.create_goal("A", dec("100")).unwrap();
    let b = store.create_goal("B", dec("100")).unwrap();
    let c = store.create_goal("C", dec("100")).unwrap();
    store.contribute(b, dec("100")).unwrap();

    let active: Vec<i64> = store.active_goals().unwrap().iter().map(|g| g.id).collect();
    let done: Vec<i64> = store
        .completed_goals()
        .unwrap()
        .iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(active, vec![a, c]);
    assert_eq!(done, vec![b]);
}

#[test]
fn goals_are_only_removed_explicitly() {
    let store = FinanceStore::open_in_memory().unwrap();
    let id = store.create_goal("Done", dec("10")).unwrap();
    store.contribute(id, dec("10")).unwrap();
    // Completion never deletes.
    assert_eq!(store.goals().unwrap().len(), 1);

    store.remove_goal(id).unwrap();
    assert!(store.goals().unwrap().is_empty());
    let err = store.remove_goal(id).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}
