// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure budget-allocation arithmetic over a ledger snapshot.
//!
//! Everything here is recomputed from the raw transactions on every read;
//! nothing is cached, so the reconciliation invariants hold by construction.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BudgetSettings, Category, Transaction, TxKind};

/// Utilization above this percentage raises a near-limit alert.
pub const NEAR_LIMIT_PCT: u32 = 90;

/// True when `date` falls inside the YYYY-MM month string: both month and
/// year must match.
pub fn in_month(date: NaiveDate, month: &str) -> bool {
    format!("{:04}-{:02}", date.year(), date.month()) == month
}

/// Sum of expense amounts for one category inside the month. Transfers and
/// income never count, whatever their category field says.
pub fn category_spent(txs: &[Transaction], category: Category, month: &str) -> Decimal {
    txs.iter()
        .filter(|t| t.kind == TxKind::Expense && t.category == category && in_month(t.date, month))
        .map(|t| t.amount)
        .sum()
}

/// Total across the three buckets only; untagged expenses and transfers are
/// excluded here exactly as they are from each bucket sum.
pub fn total_spent(txs: &[Transaction], month: &str) -> Decimal {
    Category::BUCKETS
        .iter()
        .map(|c| category_spent(txs, *c, month))
        .sum()
}

/// Authoritative income basis for the month: a configured fixed salary always
/// wins; without one, the basis is the sum of in-month income transactions.
pub fn income_basis(txs: &[Transaction], month: &str, salary: Option<Decimal>) -> Decimal {
    if let Some(s) = salary {
        return s;
    }
    txs.iter()
        .filter(|t| t.kind == TxKind::Income && in_month(t.date, month))
        .map(|t| t.amount)
        .sum()
}

pub fn category_budget(basis: Decimal, percentage: Decimal) -> Decimal {
    basis * percentage / Decimal::ONE_HUNDRED
}

/// Spent-to-budget ratio as a percentage, unbounded above 100. Defined as 0
/// for a zero budget so a fresh ledger never divides by zero.
pub fn utilization(spent: Decimal, budget: Decimal) -> Decimal {
    if budget.is_zero() {
        return Decimal::ZERO;
    }
    spent / budget * Decimal::ONE_HUNDRED
}

/// Progress-bar fill: the raw utilization clamped to 100 for display.
pub fn display_fill(utilization: Decimal) -> Decimal {
    utilization.min(Decimal::ONE_HUNDRED)
}

/// Remaining income after bucket spending. Negative is a valid, meaningful
/// state (overspent month), not an error.
pub fn remaining(basis: Decimal, total_spent: Decimal) -> Decimal {
    basis - total_spent
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Ok,
    NearLimit,
    Exceeded,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Ok => "ok",
            AlertLevel::NearLimit => "near-limit",
            AlertLevel::Exceeded => "exceeded",
        }
    }
}

pub fn alert_level(utilization: Decimal) -> AlertLevel {
    if utilization > Decimal::ONE_HUNDRED {
        AlertLevel::Exceeded
    } else if utilization > Decimal::from(NEAR_LIMIT_PCT) {
        AlertLevel::NearLimit
    } else {
        AlertLevel::Ok
    }
}

/// One bucket's derived figures for a month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketReport {
    pub category: Category,
    pub budget: Decimal,
    pub spent: Decimal,
    pub utilization: Decimal,
    pub fill: Decimal,
    pub alert: AlertLevel,
}

pub fn bucket_report(
    txs: &[Transaction],
    settings: &BudgetSettings,
    basis: Decimal,
    category: Category,
    month: &str,
) -> BucketReport {
    let budget = category_budget(basis, settings.percentage(category));
    let spent = category_spent(txs, category, month);
    let util = utilization(spent, budget);
    BucketReport {
        category,
        budget,
        spent,
        utilization: util,
        fill: display_fill(util),
        alert: alert_level(util),
    }
}
