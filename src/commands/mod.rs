// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod dashboard;
pub mod doctor;
pub mod exporter;
pub mod fnpf;
pub mod goals;
pub mod salary;
pub mod transactions;
