// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod cli;
pub mod commands;
pub mod db;
pub mod errors;
pub mod fnpf;
pub mod models;
pub mod store;
pub mod utils;
