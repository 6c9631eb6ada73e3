// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::FinanceStore;
use crate::utils::{fmt_money, parse_decimal};

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            store.set_salary(amount)?;
            println!("Fixed salary set to {}", fmt_money(&amount));
        }
        Some(("clear", _)) => {
            store.clear_salary()?;
            println!("Fixed salary cleared; budgets follow in-month income");
        }
        Some(("show", _)) => match store.salary()? {
            Some(s) => println!("Fixed salary: {}", fmt_money(&s)),
            None => println!("No fixed salary; budgets follow in-month income"),
        },
        _ => {}
    }
    Ok(())
}
