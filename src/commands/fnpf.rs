// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rust_decimal::Decimal;

use crate::fnpf::{load_config, project, EMPLOYER_RATE, FNPF_CONFIG_KEY};
use crate::store::FinanceStore;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        Some(("project", sub)) => run_projection(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn percentage(s: &str) -> Result<Decimal> {
    let v = parse_decimal(s)?;
    if v < Decimal::ZERO || v > Decimal::ONE_HUNDRED {
        bail!("percentage must be between 0 and 100, got {}", v);
    }
    Ok(v)
}

fn set(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let mut cfg = load_config(store);
    if let Some(s) = sub.get_one::<String>("employee") {
        cfg.employee_percentage = percentage(s)?;
    }
    if let Some(s) = sub.get_one::<String>("personal") {
        cfg.personal_contribution_percentage = percentage(s)?;
    }
    store.save_setting(FNPF_CONFIG_KEY, &serde_json::to_string(&cfg)?)?;
    println!(
        "FNPF config saved: employee {}% / personal {}%",
        cfg.employee_percentage, cfg.personal_contribution_percentage
    );
    Ok(())
}

fn show(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let cfg = load_config(store);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cfg)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(
            &["Employee %", "Employer % (statutory)", "Personal %"],
            vec![vec![
                cfg.employee_percentage.to_string(),
                EMPLOYER_RATE.to_string(),
                cfg.personal_contribution_percentage.to_string(),
            ]]
        )
    );
    Ok(())
}

fn run_projection(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let salary = match sub.get_one::<String>("salary") {
        Some(s) => parse_decimal(s)?,
        None => match store.salary()? {
            Some(s) => s,
            None => bail!("no fixed salary configured; pass --salary"),
        },
    };
    let cfg = load_config(store);
    let p = project(salary, &cfg);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &p)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(
            &["Salary", "Employee", "Employer", "Voluntary", "Monthly", "Annual"],
            vec![vec![
                fmt_money(&p.salary),
                fmt_money(&p.employee),
                fmt_money(&p.employer),
                fmt_money(&p.voluntary),
                fmt_money(&p.monthly_total),
                fmt_money(&p.annual_total),
            ]]
        )
    );
    Ok(())
}
