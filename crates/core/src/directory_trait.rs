//! Directory backend abstraction trait
//!
//! Provides a common interface for the seeded `SQLite` store and the remote
//! search API, so callers are unaffected by which one answers.

use async_trait::async_trait;

use crate::{CountryFilter, PageRequest, Result, University};

/// Read-only university directory.
///
/// `SQLite` implementations run their blocking work through `spawn_blocking`;
/// the remote implementation is natively async.
#[async_trait]
pub trait UniversityDirectory: Send + Sync {
    /// One page of universities matching `filter`, ascending by name.
    ///
    /// A page past the end of the data is an empty vector, never an error.
    async fn list_universities(
        &self,
        filter: &CountryFilter,
        page: PageRequest,
    ) -> Result<Vec<University>>;

    /// Distinct country names, ascending.
    async fn list_countries(&self) -> Result<Vec<String>>;
}
