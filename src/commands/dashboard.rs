// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::FinanceStore;
use crate::utils::{current_month, fmt_money, maybe_print_json, parse_month, pretty_table};

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    let month = match m.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => current_month(),
    };
    let snap = store.snapshot(&month)?;

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &snap)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Month", "Income basis", "Spent", "Remaining", "Want wallet", "Bank"],
            vec![vec![
                snap.month.clone(),
                fmt_money(&snap.income_basis),
                fmt_money(&snap.total_spent),
                fmt_money(&snap.remaining_salary),
                fmt_money(&snap.want_wallet_balance),
                fmt_money(&snap.bank_balance),
            ]]
        )
    );

    let bucket_rows: Vec<Vec<String>> = snap
        .buckets
        .iter()
        .map(|b| {
            vec![
                b.category.to_string(),
                fmt_money(&b.budget),
                fmt_money(&b.spent),
                format!("{:.1}%", b.utilization.round_dp(1)),
                b.alert.as_str().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Bucket", "Budget", "Spent", "Utilization", "Alert"], bucket_rows)
    );

    if !snap.goals.is_empty() {
        let goal_rows: Vec<Vec<String>> = snap
            .goals
            .iter()
            .map(|g| {
                vec![
                    g.name.clone(),
                    fmt_money(&g.current_amount),
                    fmt_money(&g.target_amount),
                    if g.is_completed { "done".into() } else { "active".into() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Goal", "Saved", "Target", "Status"], goal_rows)
        );
    }
    Ok(())
}
