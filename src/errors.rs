// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors surfaced by the finance store.
///
/// Validation failures are raised before any state is touched, so a failed
/// mutation leaves the ledger and every derived aggregate unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before any mutation (negative amount, unknown account,
    /// percentages that do not sum to 100, and so on).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced transaction or goal does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The durable store could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => {
                StoreError::NotFound("no matching row".into())
            }
            value => StoreError::Persistence(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Persistence(value.to_string())
    }
}
