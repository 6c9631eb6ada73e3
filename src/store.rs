// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The finance store: transaction ledger, savings goals, persisted settings,
//! and the derived dashboard snapshot every reader consumes.
//!
//! The store is an explicit, injectable container around one SQLite
//! connection. All mutations validate first and touch state second, so a
//! rejected operation leaves previously read aggregates intact. Derived
//! figures are recomputed from the raw tables on every read.

use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::{self, BucketReport};
use crate::db;
use crate::errors::StoreError;
use crate::models::{
    Account, BudgetSettings, Category, Goal, NewTransaction, Transaction, TxKind,
};

pub const BUDGET_SETTINGS_KEY: &str = "budget-settings";
pub const SALARY_KEY: &str = "salary";

pub struct FinanceStore {
    conn: Connection,
}

impl FinanceStore {
    /// Wrap an open connection, initializing the schema idempotently.
    pub fn new(mut conn: Connection) -> Result<Self, StoreError> {
        db::init_schema(&mut conn).map_err(|e| StoreError::Persistence(e.to_string()))?;
        Ok(FinanceStore { conn })
    }

    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::new(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::new(conn)
    }

    /// Raw connection, for maintenance commands (doctor) that inspect rows
    /// the typed readers would reject.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ----- transaction ledger -----

    /// Append an income or expense entry. Transfers go through [`transfer`],
    /// which carries both legs.
    ///
    /// [`transfer`]: FinanceStore::transfer
    pub fn record(&self, tx: &NewTransaction) -> Result<i64, StoreError> {
        if tx.amount < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "amount must be non-negative, got {}",
                tx.amount
            )));
        }
        match tx.kind {
            TxKind::Transfer => {
                return Err(StoreError::Validation(
                    "transfers are recorded with their receiving account; use transfer".into(),
                ));
            }
            TxKind::Income if tx.category.is_bucket() => {
                return Err(StoreError::Validation(
                    "income entries carry category 'none'".into(),
                ));
            }
            _ => {}
        }
        self.conn.execute(
            "INSERT INTO transactions(date, kind, category, account, amount, description, document_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                tx.date.to_string(),
                tx.kind.as_str(),
                tx.category.as_str(),
                tx.account.as_str(),
                tx.amount.to_string(),
                tx.description,
                tx.document_url
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Move value between two accounts. Both legs live on one row (`account`
    /// debited, `counter_account` credited), so they apply or fail as a unit.
    pub fn transfer(
        &self,
        date: NaiveDate,
        from: Account,
        to: Account,
        amount: Decimal,
        description: &str,
    ) -> Result<i64, StoreError> {
        if amount < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "amount must be non-negative, got {}",
                amount
            )));
        }
        if from == to {
            return Err(StoreError::Validation(format!(
                "cannot transfer from '{}' to itself",
                from
            )));
        }
        self.conn.execute(
            "INSERT INTO transactions(date, kind, category, account, counter_account, amount, description)
             VALUES (?1, 'transfer', 'none', ?2, ?3, ?4, ?5)",
            params![
                date.to_string(),
                from.as_str(),
                to.as_str(),
                amount.to_string(),
                description
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All transactions in insertion order. Callers re-sort by date for
    /// display; the ledger itself does not guarantee date ordering.
    pub fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, kind, category, account, counter_account, amount, description, document_url
             FROM transactions ORDER BY id",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let date: String = r.get(1)?;
            let kind: String = r.get(2)?;
            let category: String = r.get(3)?;
            let account: String = r.get(4)?;
            let counter: Option<String> = r.get(5)?;
            let amount: String = r.get(6)?;
            let description: String = r.get(7)?;
            let document_url: Option<String> = r.get(8)?;
            out.push(Transaction {
                id,
                date: parse_stored_date(&date)?,
                kind: parse_stored::<TxKind>("kind", &kind)?,
                category: parse_stored::<Category>("category", &category)?,
                account: parse_stored::<Account>("account", &account)?,
                counter_account: counter
                    .map(|c| parse_stored::<Account>("counter_account", &c))
                    .transpose()?,
                amount: parse_stored_decimal(&amount)?,
                description,
                document_url,
            });
        }
        Ok(out)
    }

    pub fn remove(&self, id: i64) -> Result<(), StoreError> {
        let n = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound(format!("transaction {}", id)));
        }
        Ok(())
    }

    // ----- savings goals -----

    pub fn create_goal(&self, name: &str, target_amount: Decimal) -> Result<i64, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("goal name must not be empty".into()));
        }
        if target_amount <= Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "goal target must be positive, got {}",
                target_amount
            )));
        }
        self.conn.execute(
            "INSERT INTO goals(name, target_amount) VALUES (?1, ?2)",
            params![name.trim(), target_amount.to_string()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Add to a goal's saved amount. Over-funding is allowed; completion is
    /// derived from the amounts on read, never from a stored flag.
    pub fn contribute(&self, goal_id: i64, amount: Decimal) -> Result<(), StoreError> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "contribution must be positive, got {}",
                amount
            )));
        }
        let current: Option<String> = self
            .conn
            .query_row(
                "SELECT current_amount FROM goals WHERE id=?1",
                params![goal_id],
                |r| r.get(0),
            )
            .optional()?;
        let Some(current) = current else {
            return Err(StoreError::NotFound(format!("goal {}", goal_id)));
        };
        let new_amount = parse_stored_decimal(&current)? + amount;
        self.conn.execute(
            "UPDATE goals SET current_amount=?1 WHERE id=?2",
            params![new_amount.to_string(), goal_id],
        )?;
        Ok(())
    }

    /// All goals in insertion order, completion recomputed on the way out.
    pub fn goals(&self) -> Result<Vec<Goal>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, target_amount, current_amount FROM goals ORDER BY id")?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let name: String = r.get(1)?;
            let target: String = r.get(2)?;
            let current: String = r.get(3)?;
            let target_amount = parse_stored_decimal(&target)?;
            let current_amount = parse_stored_decimal(&current)?;
            out.push(Goal {
                id,
                name,
                target_amount,
                current_amount,
                is_completed: current_amount >= target_amount,
            });
        }
        Ok(out)
    }

    pub fn active_goals(&self) -> Result<Vec<Goal>, StoreError> {
        Ok(self.goals()?.into_iter().filter(|g| !g.is_completed).collect())
    }

    pub fn completed_goals(&self) -> Result<Vec<Goal>, StoreError> {
        Ok(self.goals()?.into_iter().filter(|g| g.is_completed).collect())
    }

    pub fn remove_goal(&self, id: i64) -> Result<(), StoreError> {
        let n = self
            .conn
            .execute("DELETE FROM goals WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound(format!("goal {}", id)));
        }
        Ok(())
    }

    // ----- persisted settings -----

    pub fn load_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    pub fn save_setting(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn delete_setting(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM settings WHERE key=?1", params![key])?;
        Ok(())
    }

    /// Budget split percentages; `{50, 30, 20}` when nothing is stored.
    /// Malformed stored JSON degrades to the default with a warning.
    pub fn budget_settings(&self) -> Result<BudgetSettings, StoreError> {
        match self.load_setting(BUDGET_SETTINGS_KEY)? {
            Some(raw) => match serde_json::from_str::<BudgetSettings>(&raw) {
                Ok(s) => Ok(s),
                Err(e) => {
                    eprintln!(
                        "warning: malformed {} ({}); using defaults",
                        BUDGET_SETTINGS_KEY, e
                    );
                    Ok(BudgetSettings::default())
                }
            },
            None => Ok(BudgetSettings::default()),
        }
    }

    pub fn set_budget_settings(&self, settings: &BudgetSettings) -> Result<(), StoreError> {
        for (name, pct) in [
            ("needs", settings.needs_percentage),
            ("wants", settings.wants_percentage),
            ("responsibilities", settings.responsibilities_percentage),
        ] {
            if pct < Decimal::ZERO {
                return Err(StoreError::Validation(format!(
                    "{} percentage must be non-negative, got {}",
                    name, pct
                )));
            }
        }
        let sum = settings.needs_percentage
            + settings.wants_percentage
            + settings.responsibilities_percentage;
        if sum != Decimal::ONE_HUNDRED {
            return Err(StoreError::Validation(format!(
                "percentages must sum to 100, got {}",
                sum
            )));
        }
        self.save_setting(BUDGET_SETTINGS_KEY, &serde_json::to_string(settings)?)
    }

    /// Fixed monthly salary override; `None` when unset. A malformed stored
    /// value is surfaced as a warning and treated as unset.
    pub fn salary(&self) -> Result<Option<Decimal>, StoreError> {
        match self.load_setting(SALARY_KEY)? {
            Some(raw) => match raw.parse::<Decimal>() {
                Ok(d) => Ok(Some(d)),
                Err(_) => {
                    eprintln!("warning: malformed {} '{}'; ignoring", SALARY_KEY, raw);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn set_salary(&self, amount: Decimal) -> Result<(), StoreError> {
        if amount < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "salary must be non-negative, got {}",
                amount
            )));
        }
        self.save_setting(SALARY_KEY, &amount.to_string())
    }

    pub fn clear_salary(&self) -> Result<(), StoreError> {
        self.delete_setting(SALARY_KEY)
    }

    // ----- balances -----

    pub fn balance(&self, account: Account) -> Result<Decimal, StoreError> {
        Ok(balance_of(&self.transactions()?, account))
    }

    pub fn want_wallet_balance(&self) -> Result<Decimal, StoreError> {
        Ok(wallet_balance(&self.transactions()?))
    }

    pub fn bank_balance(&self) -> Result<Decimal, StoreError> {
        Ok(bank_balance(&self.transactions()?))
    }

    // ----- derived snapshot -----

    /// The full read surface for one month, derived in a single pass so every
    /// figure comes from the same ledger state.
    pub fn snapshot(&self, month: &str) -> Result<DashboardSnapshot, StoreError> {
        let budget_settings = self.budget_settings()?;
        let transactions = self.transactions()?;
        let goals = self.goals()?;
        let basis = budget::income_basis(&transactions, month, self.salary()?);

        let needs =
            budget::bucket_report(&transactions, &budget_settings, basis, Category::Needs, month);
        let wants =
            budget::bucket_report(&transactions, &budget_settings, basis, Category::Wants, month);
        let responsibilities = budget::bucket_report(
            &transactions,
            &budget_settings,
            basis,
            Category::Responsibilities,
            month,
        );

        let total_spent = needs.spent + wants.spent + responsibilities.spent;
        let snapshot = DashboardSnapshot {
            month: month.to_string(),
            budget_settings,
            want_wallet_balance: wallet_balance(&transactions),
            bank_balance: bank_balance(&transactions),
            income_basis: basis,
            needs_budget: needs.budget,
            wants_budget: wants.budget,
            responsibilities_budget: responsibilities.budget,
            needs_spent: needs.spent,
            wants_spent: wants.spent,
            responsibilities_spent: responsibilities.spent,
            total_spent,
            remaining_salary: budget::remaining(basis, total_spent),
            buckets: vec![needs, wants, responsibilities],
            transactions,
            goals,
        };
        Ok(snapshot)
    }
}

/// Signed running total for one account: income credits, expenses debit, a
/// transfer debits `account` and credits `counter_account`.
pub fn balance_of(txs: &[Transaction], account: Account) -> Decimal {
    let mut total = Decimal::ZERO;
    for t in txs {
        match t.kind {
            TxKind::Income => {
                if t.account == account {
                    total += t.amount;
                }
            }
            TxKind::Expense => {
                if t.account == account {
                    total -= t.amount;
                }
            }
            TxKind::Transfer => {
                if t.account == account {
                    total -= t.amount;
                }
                if t.counter_account == Some(account) {
                    total += t.amount;
                }
            }
        }
    }
    total
}

pub fn wallet_balance(txs: &[Transaction]) -> Decimal {
    Account::ALL
        .iter()
        .filter(|a| a.is_wallet())
        .map(|a| balance_of(txs, *a))
        .sum()
}

pub fn bank_balance(txs: &[Transaction]) -> Decimal {
    Account::ALL
        .iter()
        .filter(|a| !a.is_wallet())
        .map(|a| balance_of(txs, *a))
        .sum()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub month: String,
    pub budget_settings: BudgetSettings,
    pub want_wallet_balance: Decimal,
    pub bank_balance: Decimal,
    pub income_basis: Decimal,
    pub needs_budget: Decimal,
    pub wants_budget: Decimal,
    pub responsibilities_budget: Decimal,
    pub needs_spent: Decimal,
    pub wants_spent: Decimal,
    pub responsibilities_spent: Decimal,
    pub total_spent: Decimal,
    pub remaining_salary: Decimal,
    pub buckets: Vec<BucketReport>,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
}

fn parse_stored_date(s: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| StoreError::Persistence(format!("invalid stored date '{}'", s)))
}

fn parse_stored_decimal(s: &str) -> Result<Decimal, StoreError> {
    s.parse::<Decimal>()
        .map_err(|_| StoreError::Persistence(format!("invalid stored amount '{}'", s)))
}

fn parse_stored<T: FromStr<Err = StoreError>>(field: &str, s: &str) -> Result<T, StoreError> {
    s.parse::<T>()
        .map_err(|_| StoreError::Persistence(format!("invalid stored {} '{}'", field, s)))
}
