// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! FNPF contribution projection.
//!
//! The employer share uses the statutory matching rate, a fixed policy
//! constant. Only the employee's elective rate and any voluntary personal
//! rate come from configuration.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::FnpfConfig;
use crate::store::FinanceStore;

pub const FNPF_CONFIG_KEY: &str = "fnpf-config";

/// Statutory employer matching rate, percent of gross salary.
pub static EMPLOYER_RATE: Lazy<Decimal> = Lazy::new(|| Decimal::new(85, 1));

/// Load the persisted FNPF configuration, substituting the default
/// `{employeePercentage: 8.5, personalContributionPercentage: 0}` when the
/// key is absent, unreadable, or holds malformed JSON. Never errors.
pub fn load_config(store: &FinanceStore) -> FnpfConfig {
    match store.load_setting(FNPF_CONFIG_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<FnpfConfig>(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("warning: malformed {} ({}); using defaults", FNPF_CONFIG_KEY, e);
                FnpfConfig::default()
            }
        },
        Ok(None) => FnpfConfig::default(),
        Err(e) => {
            eprintln!("warning: could not read {} ({}); using defaults", FNPF_CONFIG_KEY, e);
            FnpfConfig::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub salary: Decimal,
    pub employee: Decimal,
    pub employer: Decimal,
    pub voluntary: Decimal,
    pub monthly_total: Decimal,
    pub annual_total: Decimal,
}

/// Project one month of contributions from a gross salary figure.
pub fn project(salary: Decimal, config: &FnpfConfig) -> Projection {
    let employee = salary * config.employee_percentage / Decimal::ONE_HUNDRED;
    let employer = salary * *EMPLOYER_RATE / Decimal::ONE_HUNDRED;
    let voluntary = salary * config.personal_contribution_percentage / Decimal::ONE_HUNDRED;
    let monthly_total = employee + employer + voluntary;
    Projection {
        salary,
        employee,
        employer,
        voluntary,
        monthly_total,
        annual_total: monthly_total * Decimal::from(12),
    }
}
