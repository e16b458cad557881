//! Async trait implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use unidir_core::{CountryFilter, PageRequest, University, UniversityDirectory};

use crate::Storage;
use crate::error::StorageError;
use crate::types::SeedOutcome;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(format!("spawn_blocking join error: {e}")))?
}

impl Storage {
    /// `initialize` on the blocking pool, for async start-up code.
    ///
    /// # Errors
    /// Same as `initialize`.
    pub async fn initialize_async(&self) -> Result<SeedOutcome, StorageError> {
        let s = self.clone();
        blocking(move || s.initialize()).await
    }
}

#[async_trait]
impl UniversityDirectory for Storage {
    async fn list_universities(
        &self,
        filter: &CountryFilter,
        page: PageRequest,
    ) -> unidir_core::Result<Vec<University>> {
        let s = self.clone();
        let filter = filter.clone();
        Ok(blocking(move || s.list_universities(&filter, page)).await?)
    }

    async fn list_countries(&self) -> unidir_core::Result<Vec<String>> {
        let s = self.clone();
        Ok(blocking(move || s.list_countries()).await?)
    }
}
