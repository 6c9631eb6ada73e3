// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::BudgetSettings;
use crate::store::FinanceStore;
use crate::utils::{current_month, fmt_money, maybe_print_json, parse_decimal, parse_month, pretty_table};

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("status", sub)) => status(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let settings = BudgetSettings {
        needs_percentage: parse_decimal(sub.get_one::<String>("needs").unwrap())?,
        wants_percentage: parse_decimal(sub.get_one::<String>("wants").unwrap())?,
        responsibilities_percentage: parse_decimal(
            sub.get_one::<String>("responsibilities").unwrap(),
        )?,
    };
    store.set_budget_settings(&settings)?;
    println!(
        "Budget split saved: needs {} / wants {} / responsibilities {}",
        settings.needs_percentage, settings.wants_percentage, settings.responsibilities_percentage
    );
    Ok(())
}

fn status(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => current_month(),
    };
    let snap = store.snapshot(&month)?;

    if maybe_print_json(json_flag, jsonl_flag, &snap.buckets)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = snap
        .buckets
        .iter()
        .map(|b| {
            vec![
                b.category.to_string(),
                fmt_money(&b.budget),
                fmt_money(&b.spent),
                format!("{:.1}%", b.utilization.round_dp(1)),
                format!("{:.0}%", b.fill.round_dp(0)),
                b.alert.as_str().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Bucket", "Budget", "Spent", "Utilization", "Fill", "Alert"],
            rows
        )
    );
    println!(
        "Income basis {} | spent {} | remaining {}",
        fmt_money(&snap.income_basis),
        fmt_money(&snap.total_spent),
        fmt_money(&snap.remaining_salary)
    );
    Ok(())
}
