// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use moni::fnpf::{load_config, FNPF_CONFIG_KEY};
use moni::models::{Account, BudgetSettings, Category, FnpfConfig, NewTransaction, TxKind};
use moni::store::FinanceStore;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moni.sqlite");

    {
        let store = FinanceStore::open(&path).unwrap();
        store
            .record(&NewTransaction {
                date: NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
                kind: TxKind::Expense,
                category: Category::Responsibilities,
                account: Account::Hfc,
                amount: dec("75.25"),
                description: "school fees".into(),
                document_url: Some("file:///receipts/0815.pdf".into()),
            })
            .unwrap();
        let goal = store.create_goal("Emergency fund", dec("5000")).unwrap();
        store.contribute(goal, dec("250")).unwrap();
        store.set_salary(dec("2500")).unwrap();
        store
            .set_budget_settings(&BudgetSettings {
                needs_percentage: dec("55"),
                wants_percentage: dec("25"),
                responsibilities_percentage: dec("20"),
            })
            .unwrap();
        let cfg = FnpfConfig {
            employee_percentage: dec("10"),
            personal_contribution_percentage: dec("1.5"),
        };
        store
            .save_setting(FNPF_CONFIG_KEY, &serde_json::to_string(&cfg).unwrap())
            .unwrap();
    }

    let store = FinanceStore::open(&path).unwrap();
    let txs = store.transactions().unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, dec("75.25"));
    assert_eq!(txs[0].account, Account::Hfc);
    assert_eq!(txs[0].document_url.as_deref(), Some("file:///receipts/0815.pdf"));

    let goals = store.goals().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].current_amount, dec("250"));
    assert!(!goals[0].is_completed);

    assert_eq!(store.salary().unwrap(), Some(dec("2500")));
    assert_eq!(store.budget_settings().unwrap().needs_percentage, dec("55"));

    let cfg = load_config(&store);
    assert_eq!(cfg.employee_percentage, dec("10"));
    assert_eq!(cfg.personal_contribution_percentage, dec("1.5"));
}

#[test]
fn snapshot_is_consistent_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moni.sqlite");

    {
        let store = FinanceStore::open(&path).unwrap();
        store.set_salary(dec("2000")).unwrap();
        store
            .record(&NewTransaction {
                date: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
                kind: TxKind::Expense,
                category: Category::Needs,
                account: Account::Bsp,
                amount: dec("400"),
                description: String::new(),
                document_url: None,
            })
            .unwrap();
    }

    let store = FinanceStore::open(&path).unwrap();
    let snap = store.snapshot("2025-08").unwrap();
    assert_eq!(snap.needs_spent, dec("400"));
    assert_eq!(snap.total_spent, dec("400"));
    assert_eq!(snap.remaining_salary, dec("1600"));
}
