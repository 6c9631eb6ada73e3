// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::budget::in_month;
use crate::models::{Account, Category, NewTransaction, TxKind};
use crate::store::FinanceStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("transfer", sub)) => transfer(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn date_or_today(sub: &clap::ArgMatches) -> Result<chrono::NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn add(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TxKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let account: Account = sub.get_one::<String>("account").unwrap().parse()?;
    let category: Category = match sub.get_one::<String>("category") {
        Some(s) => s.parse()?,
        None => Category::None,
    };
    let date = date_or_today(sub)?;
    let description = sub.get_one::<String>("desc").cloned().unwrap_or_default();
    let document_url = sub.get_one::<String>("doc").cloned();

    let id = store.record(&NewTransaction {
        date,
        kind,
        category,
        account,
        amount,
        description,
        document_url,
    })?;
    println!(
        "Recorded {} of {} on {} ({}, #{})",
        kind,
        fmt_money(&amount),
        date,
        account,
        id
    );
    Ok(())
}

fn transfer(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let from: Account = sub.get_one::<String>("from").unwrap().parse()?;
    let to: Account = sub.get_one::<String>("to").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = date_or_today(sub)?;
    let description = sub.get_one::<String>("desc").cloned().unwrap_or_default();

    let id = store.transfer(date, from, to, amount, &description)?;
    println!(
        "Transferred {} from {} to {} on {} (#{})",
        fmt_money(&amount),
        from,
        to,
        date,
        id
    );
    Ok(())
}

fn rm(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.remove(id)?;
    println!("Removed transaction #{}", id);
    Ok(())
}

fn list(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.account.clone(),
                    r.counter_account.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Category", "Account", "To", "Amount", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub account: String,
    pub counter_account: String,
    pub amount: String,
    pub description: String,
}

pub fn query_rows(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut txs = store.transactions()?;

    if let Some(month) = sub.get_one::<String>("month") {
        let month = parse_month(month)?;
        txs.retain(|t| in_month(t.date, &month));
    }
    if let Some(acct) = sub.get_one::<String>("account") {
        let acct: Account = acct.parse()?;
        txs.retain(|t| t.account == acct || t.counter_account == Some(acct));
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        let cat: Category = cat.parse()?;
        txs.retain(|t| t.category == cat);
    }

    txs.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }

    Ok(txs
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            category: t.category.to_string(),
            account: t.account.to_string(),
            counter_account: t
                .counter_account
                .map(|a| a.to_string())
                .unwrap_or_default(),
            amount: fmt_money(&t.amount),
            description: t.description,
        })
        .collect())
}
