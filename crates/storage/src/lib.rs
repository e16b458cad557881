//! Storage layer for unidir
//!
//! Seeds a static university dataset into `SQLite` exactly once and answers
//! filtered, paginated reads with the same contract as the remote search API.

mod dataset;
mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
mod types;

pub use dataset::DatasetSource;
pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::Storage;
pub use types::{SeedOutcome, StoreState};
