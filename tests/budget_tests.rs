// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use moni::budget::{self, AlertLevel};
use moni::errors::StoreError;
use moni::models::{Account, BudgetSettings, Category, NewTransaction, TxKind};
use moni::store::FinanceStore;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn add(store: &FinanceStore, date_s: &str, kind: TxKind, category: Category, amount: &str) {
    store
        .record(&NewTransaction {
            date: date(date_s),
            kind,
            category,
            account: Account::Bsp,
            amount: dec(amount),
            description: String::new(),
            document_url: None,
        })
        .unwrap();
}

#[test]
fn total_spent_reconciles_across_buckets() {
    let store = FinanceStore::open_in_memory().unwrap();
    add(&store, "2025-08-02", TxKind::Expense, Category::Needs, "100");
    add(&store, "2025-08-05", TxKind::Expense, Category::Wants, "40");
    add(&store, "2025-08-09", TxKind::Expense, Category::Responsibilities, "25");
    // Excluded from every bucket sum: untagged expense, income, transfer,
    // and an expense outside the month.
    add(&store, "2025-08-11", TxKind::Expense, Category::None, "999");
    add(&store, "2025-08-01", TxKind::Income, Category::None, "2500");
    store
        .transfer(date("2025-08-03"), Account::Bsp, Account::Mpaisa, dec("50"), "")
        .unwrap();
    add(&store, "2025-07-20", TxKind::Expense, Category::Needs, "77");

    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.needs_spent, dec("100"));
    assert_eq!(snap.wants_spent, dec("40"));
    assert_eq!(snap.responsibilities_spent, dec("25"));
    assert_eq!(snap.total_spent, dec("165"));
    assert_eq!(
        snap.total_spent,
        snap.needs_spent + snap.wants_spent + snap.responsibilities_spent
    );
}

#[test]
fn utilization_is_zero_for_zero_budget() {
    assert_eq!(budget::utilization(dec("50"), Decimal::ZERO), Decimal::ZERO);
    // Fresh store, no income, no salary: every bucket budget is zero.
    let store = FinanceStore::open_in_memory().unwrap();
    add(&store, "2025-08-02", TxKind::Expense, Category::Needs, "10");
    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.needs_budget, Decimal::ZERO);
    assert_eq!(snap.buckets[0].utilization, Decimal::ZERO);
}

#[test]
fn near_limit_alert_at_95_percent() {
    // needsBudget 1000 (salary 2000 at 50%), needsSpent 950 -> 95%.
    let store = FinanceStore::open_in_memory().unwrap();
    store.set_salary(dec("2000")).unwrap();
    add(&store, "2025-08-10", TxKind::Expense, Category::Needs, "950");

    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.needs_budget, dec("1000"));
    let needs = &snap.buckets[0];
    assert_eq!(needs.utilization, dec("95"));
    assert_eq!(needs.alert, AlertLevel::NearLimit);
}

#[test]
fn exceeded_alert_reports_raw_percentage_and_clamped_fill() {
    // wantsBudget 500 (salary 2500 at 20%), wantsSpent 600 -> 120%.
    let store = FinanceStore::open_in_memory().unwrap();
    store.set_salary(dec("2500")).unwrap();
    store
        .set_budget_settings(&BudgetSettings {
            needs_percentage: dec("50"),
            wants_percentage: dec("20"),
            responsibilities_percentage: dec("30"),
        })
        .unwrap();
    add(&store, "2025-08-12", TxKind::Expense, Category::Wants, "600");

    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.wants_budget, dec("500"));
    let wants = &snap.buckets[1];
    assert_eq!(wants.utilization, dec("120"));
    assert_eq!(wants.fill, dec("100"));
    assert_eq!(wants.alert, AlertLevel::Exceeded);
}

#[test]
fn fixed_salary_takes_precedence_over_income() {
    let store = FinanceStore::open_in_memory().unwrap();
    add(&store, "2025-08-01", TxKind::Income, Category::None, "1800");
    store.set_salary(dec("3000")).unwrap();
    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.income_basis, dec("3000"));
    assert_eq!(snap.needs_budget, dec("1500"));

    store.clear_salary().unwrap();
    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.income_basis, dec("1800"));
}

#[test]
fn income_basis_only_counts_the_month() {
    let store = FinanceStore::open_in_memory().unwrap();
    add(&store, "2025-07-28", TxKind::Income, Category::None, "2000");
    add(&store, "2025-08-01", TxKind::Income, Category::None, "2500");
    add(&store, "2024-08-01", TxKind::Income, Category::None, "900");
    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.income_basis, dec("2500"));
}

#[test]
fn remaining_salary_can_go_negative() {
    let store = FinanceStore::open_in_memory().unwrap();
    store.set_salary(dec("100")).unwrap();
    add(&store, "2025-08-03", TxKind::Expense, Category::Needs, "150");
    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.remaining_salary, dec("-50"));
}

#[test]
fn default_split_is_50_30_20() {
    let store = FinanceStore::open_in_memory().unwrap();
    let s = store.budget_settings().unwrap();
    assert_eq!(s.needs_percentage, dec("50"));
    assert_eq!(s.wants_percentage, dec("30"));
    assert_eq!(s.responsibilities_percentage, dec("20"));
}

#[test]
fn split_must_sum_to_100_and_stay_non_negative() {
    let store = FinanceStore::open_in_memory().unwrap();
    let err = store
        .set_budget_settings(&BudgetSettings {
            needs_percentage: dec("60"),
            wants_percentage: dec("30"),
            responsibilities_percentage: dec("20"),
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store
        .set_budget_settings(&BudgetSettings {
            needs_percentage: dec("120"),
            wants_percentage: dec("-10"),
            responsibilities_percentage: dec("-10"),
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    // Failed saves leave the stored split untouched.
    assert_eq!(store.budget_settings().unwrap(), BudgetSettings::default());
}

#[test]
fn allocator_is_pure_over_a_ledger_slice() {
    let txs = vec![
        moni::models::Transaction {
            id: 1,
            date: date("2025-08-01"),
            kind: TxKind::Income,
            category: Category::None,
            account: Account::Anz,
            counter_account: None,
            amount: dec("2000"),
            description: String::new(),
            document_url: None,
        },
        moni::models::Transaction {
            id: 2,
            date: date("2025-08-09"),
            kind: TxKind::Expense,
            category: Category::Needs,
            account: Account::Anz,
            counter_account: None,
            amount: dec("300"),
            description: String::new(),
            document_url: None,
        },
    ];
    assert_eq!(budget::category_spent(&txs, Category::Needs, "2025-08"), dec("300"));
    assert_eq!(budget::total_spent(&txs, "2025-08"), dec("300"));
    assert_eq!(budget::income_basis(&txs, "2025-08", None), dec("2000"));
    assert_eq!(budget::income_basis(&txs, "2025-08", Some(dec("2500"))), dec("2500"));
    assert_eq!(budget::category_budget(dec("2000"), dec("50")), dec("1000"));
    assert_eq!(budget::remaining(dec("2000"), dec("300")), dec("1700"));
    // Same inputs, same answers: no hidden state.
    assert_eq!(
        budget::total_spent(&txs, "2025-08"),
        budget::total_spent(&txs, "2025-08")
    );
}

#[test]
fn malformed_stored_split_degrades_to_default() {
    let store = FinanceStore::open_in_memory().unwrap();
    store
        .save_setting("budget-settings", "{not json at all")
        .unwrap();
    assert_eq!(store.budget_settings().unwrap(), BudgetSettings::default());
}
