use unidir_core::DirectoryStats;

use super::{Storage, get_conn};
use crate::error::StorageError;

impl Storage {
    /// Row count of the universities table.
    ///
    /// # Errors
    /// Returns error if the table is missing or the query fails.
    pub fn count_universities(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM universities", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Get directory statistics. Seeds the store first if needed.
    ///
    /// # Errors
    /// Returns error if seeding or the database query fails.
    pub fn get_stats(&self) -> Result<DirectoryStats, StorageError> {
        self.ensure_seeded()?;
        let conn = get_conn(&self.pool)?;
        let (university_count, country_count): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COUNT(DISTINCT country) FROM universities",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(DirectoryStats {
            university_count: university_count as u64,
            country_count: country_count as u64,
        })
    }
}
