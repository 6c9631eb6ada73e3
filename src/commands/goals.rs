// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::FinanceStore;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
            let id = store.create_goal(name, target)?;
            println!("Created goal '{}' targeting {} (#{})", name, fmt_money(&target), id);
        }
        Some(("contribute", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            store.contribute(id, amount)?;
            println!("Contributed {} to goal #{}", fmt_money(&amount), id);
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.remove_goal(id)?;
            println!("Removed goal #{}", id);
        }
        _ => {}
    }
    Ok(())
}

fn list(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = if sub.get_flag("completed") {
        store.completed_goals()?
    } else if sub.get_flag("active") {
        store.active_goals()?
    } else {
        store.goals()?
    };
    if maybe_print_json(json_flag, jsonl_flag, &goals)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = goals
        .iter()
        .map(|g| {
            vec![
                g.id.to_string(),
                g.name.clone(),
                fmt_money(&g.target_amount),
                fmt_money(&g.current_amount),
                if g.is_completed { "yes".into() } else { "no".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Target", "Saved", "Completed"], rows)
    );
    Ok(())
}
