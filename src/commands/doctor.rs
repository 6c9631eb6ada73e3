// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::store::FinanceStore;
use crate::utils::pretty_table;

pub fn handle(store: &FinanceStore) -> Result<()> {
    let issues = scan(store)?;
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues.into_iter().map(|(i, d)| vec![i, d]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Scan the raw tables for rows the typed readers would reject or that break
/// the ledger invariants. Reads only; never repairs.
pub fn scan(store: &FinanceStore) -> Result<Vec<(String, String)>> {
    let conn = store.conn();
    let mut issues = Vec::new();

    let mut stmt =
        conn.prepare("SELECT id, kind, amount, counter_account FROM transactions ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let kind: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let counter: Option<String> = r.get(3)?;

        match amount.parse::<Decimal>() {
            Ok(a) if a < Decimal::ZERO => {
                issues.push(("negative_amount".into(), format!("tx #{} = {}", id, a)));
            }
            Ok(_) => {}
            Err(_) => {
                issues.push((
                    "unparsable_amount".into(),
                    format!("tx #{} = '{}'", id, amount),
                ));
            }
        }
        if kind == "transfer" && counter.is_none() {
            issues.push(("transfer_missing_counter".into(), format!("tx #{}", id)));
        }
        if kind != "transfer" && counter.is_some() {
            issues.push(("stray_counter_account".into(), format!("tx #{}", id)));
        }
    }

    let mut gstmt =
        conn.prepare("SELECT id, target_amount, current_amount FROM goals ORDER BY id")?;
    let mut gcur = gstmt.query([])?;
    while let Some(r) = gcur.next()? {
        let id: i64 = r.get(0)?;
        let target: String = r.get(1)?;
        let current: String = r.get(2)?;
        match target.parse::<Decimal>() {
            Ok(t) if t <= Decimal::ZERO => {
                issues.push((
                    "non_positive_target".into(),
                    format!("goal #{} = {}", id, t),
                ));
            }
            Ok(_) => {}
            Err(_) => {
                issues.push((
                    "unparsable_target".into(),
                    format!("goal #{} = '{}'", id, target),
                ));
            }
        }
        if current.parse::<Decimal>().is_err() {
            issues.push((
                "unparsable_current".into(),
                format!("goal #{} = '{}'", id, current),
            ));
        }
    }

    Ok(issues)
}
