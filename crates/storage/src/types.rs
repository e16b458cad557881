//! Storage types shared across modules

use serde::{Deserialize, Serialize};

/// Lifecycle of the universities table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreState {
    /// Table absent or holding no rows.
    Empty,
    /// Bulk seed committed.
    Seeded,
}

/// What `Storage::initialize` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// Rows were already present; nothing was inserted.
    AlreadySeeded { rows: u64 },
    /// This call inserted `rows` records.
    Seeded { rows: u64 },
}

impl SeedOutcome {
    /// Row count of the table after the call.
    #[must_use]
    pub const fn rows(&self) -> u64 {
        match *self {
            Self::AlreadySeeded { rows } | Self::Seeded { rows } => rows,
        }
    }
}
