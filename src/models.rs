// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Direction of a ledger entry. Amounts are always non-negative; the kind
/// carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
    Transfer,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
            TxKind::Transfer => "transfer",
        }
    }
}

impl FromStr for TxKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            "transfer" => Ok(TxKind::Transfer),
            other => Err(StoreError::Validation(format!(
                "unknown transaction kind '{}' (use income|expense|transfer)",
                other
            ))),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expense allocation bucket. `None` marks entries that sit outside the three
/// budget buckets (income, transfers, untagged expenses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Needs,
    Wants,
    Responsibilities,
    None,
}

impl Category {
    pub const BUCKETS: [Category; 3] =
        [Category::Needs, Category::Wants, Category::Responsibilities];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Needs => "needs",
            Category::Wants => "wants",
            Category::Responsibilities => "responsibilities",
            Category::None => "none",
        }
    }

    /// True for the three buckets that count toward budget utilization.
    pub fn is_bucket(&self) -> bool {
        !matches!(self, Category::None)
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs" => Ok(Category::Needs),
            "wants" => Ok(Category::Wants),
            "responsibilities" => Ok(Category::Responsibilities),
            "none" | "" => Ok(Category::None),
            other => Err(StoreError::Validation(format!(
                "unknown category '{}' (use needs|wants|responsibilities|none)",
                other
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of known accounts. `Other` is the generic bank-style bucket;
/// anything outside this list is rejected at the ledger boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    Anz,
    Baroda,
    Bsp,
    Bred,
    Hfc,
    Westpac,
    Mpaisa,
    Cash,
    Other,
}

impl Account {
    pub const ALL: [Account; 9] = [
        Account::Anz,
        Account::Baroda,
        Account::Bsp,
        Account::Bred,
        Account::Hfc,
        Account::Westpac,
        Account::Mpaisa,
        Account::Cash,
        Account::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Account::Anz => "anz",
            Account::Baroda => "baroda",
            Account::Bsp => "bsp",
            Account::Bred => "bred",
            Account::Hfc => "hfc",
            Account::Westpac => "westpac",
            Account::Mpaisa => "mpaisa",
            Account::Cash => "cash",
            Account::Other => "other",
        }
    }

    /// Discretionary wallets feed the want-wallet balance; everything else
    /// counts toward the bank balance.
    pub fn is_wallet(&self) -> bool {
        matches!(self, Account::Mpaisa | Account::Cash)
    }
}

impl FromStr for Account {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anz" => Ok(Account::Anz),
            "baroda" => Ok(Account::Baroda),
            "bsp" => Ok(Account::Bsp),
            "bred" => Ok(Account::Bred),
            "hfc" => Ok(Account::Hfc),
            "westpac" => Ok(Account::Westpac),
            "mpaisa" => Ok(Account::Mpaisa),
            "cash" => Ok(Account::Cash),
            "other" => Ok(Account::Other),
            other => Err(StoreError::Validation(format!(
                "unknown account '{}' (use anz|baroda|bsp|bred|hfc|westpac|mpaisa|cash|other)",
                other
            ))),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub kind: TxKind,
    pub category: Category,
    pub account: Account,
    /// Receiving account of a transfer; always `None` for income/expense.
    pub counter_account: Option<Account>,
    pub amount: Decimal,
    pub description: String,
    pub document_url: Option<String>,
}

/// Input for recording an income or expense entry.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TxKind,
    pub category: Category,
    pub account: Account,
    pub amount: Decimal,
    pub description: String,
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    /// Recomputed as `current_amount >= target_amount` on every read; the
    /// flag is never stored.
    pub is_completed: bool,
}

/// Budget split percentages. Saved only when non-negative and summing to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetSettings {
    pub needs_percentage: Decimal,
    pub wants_percentage: Decimal,
    pub responsibilities_percentage: Decimal,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        BudgetSettings {
            needs_percentage: Decimal::new(50, 0),
            wants_percentage: Decimal::new(30, 0),
            responsibilities_percentage: Decimal::new(20, 0),
        }
    }
}

impl BudgetSettings {
    pub fn percentage(&self, category: Category) -> Decimal {
        match category {
            Category::Needs => self.needs_percentage,
            Category::Wants => self.wants_percentage,
            Category::Responsibilities => self.responsibilities_percentage,
            Category::None => Decimal::ZERO,
        }
    }
}

/// Persisted FNPF configuration. Missing or unparsable stored values load as
/// the default `{8.5, 0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FnpfConfig {
    pub employee_percentage: Decimal,
    pub personal_contribution_percentage: Decimal,
}

impl Default for FnpfConfig {
    fn default() -> Self {
        FnpfConfig {
            employee_percentage: Decimal::new(85, 1),
            personal_contribution_percentage: Decimal::ZERO,
        }
    }
}
