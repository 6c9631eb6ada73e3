// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::store::FinanceStore;

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let txs = store.transactions()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "kind",
                "category",
                "account",
                "counter_account",
                "amount",
                "description",
                "document_url",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.category.to_string(),
                    t.account.to_string(),
                    t.counter_account.map(|a| a.to_string()).unwrap_or_default(),
                    t.amount.to_string(),
                    t.description.clone(),
                    t.document_url.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.to_string(),
                        "kind": t.kind.to_string(),
                        "category": t.category.to_string(),
                        "account": t.account.to_string(),
                        "counterAccount": t.counter_account.map(|a| a.to_string()),
                        "amount": t.amount.to_string(),
                        "description": t.description,
                        "documentUrl": t.document_url,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
