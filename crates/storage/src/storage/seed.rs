use std::sync::PoisonError;
use std::sync::atomic::Ordering;

use rusqlite::params;
use unidir_core::SourceRecord;

use super::{Storage, get_conn};
use crate::error::StorageError;
use crate::migrations;
use crate::types::{SeedOutcome, StoreState};

const INSERT_SQL: &str = "INSERT INTO universities (name, country, web_page, domain, state_province)
     VALUES (?1, ?2, ?3, ?4, ?5)";

impl Storage {
    /// Create the universities table and its indexes if absent.
    ///
    /// # Errors
    /// Returns `StorageError::Schema` if no connection can be opened or the DDL is rejected.
    pub fn ensure_schema(&self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool).map_err(|e| StorageError::schema("acquire connection", e))?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::schema("apply migrations", e))
    }

    /// Whether the table holds at least one row. This is the only population gate.
    ///
    /// # Errors
    /// Returns error if the count query fails (including a missing table).
    pub fn is_populated(&self) -> Result<bool, StorageError> {
        Ok(self.count_universities()? > 0)
    }

    /// Insert one row per record in a single transaction and return the number inserted.
    ///
    /// All or nothing: if any insert or the commit fails the transaction is
    /// dropped, which rolls it back, and readers never see a partial seed.
    /// Calling this concurrently with itself, outside `initialize`, is not guarded.
    ///
    /// # Errors
    /// Returns `StorageError::Insert` naming the record that failed.
    pub fn populate(&self, records: &[SourceRecord]) -> Result<u64, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction().map_err(|source| StorageError::Insert {
            context: "begin transaction".to_owned(),
            source,
        })?;

        {
            let mut stmt = tx.prepare(INSERT_SQL).map_err(|source| StorageError::Insert {
                context: "prepare insert".to_owned(),
                source,
            })?;
            for (index, record) in records.iter().enumerate() {
                stmt.execute(params![
                    record.name,
                    record.country,
                    record.first_web_page(),
                    record.first_domain(),
                    record.state_province(),
                ])
                .map_err(|source| StorageError::Insert {
                    context: format!("record {index} ({:?})", record.name),
                    source,
                })?;
            }
        }

        tx.commit()
            .map_err(|source| StorageError::Insert { context: "commit".to_owned(), source })?;

        let rows = records.len() as u64;
        tracing::info!(rows, "Universities table populated");
        Ok(rows)
    }

    /// Start-up sequence: ensure the schema, then seed from the dataset source
    /// if the table is empty. Single-flight per store; a failed attempt leaves
    /// the store `Empty` and the next call retries from scratch.
    ///
    /// # Errors
    /// Returns the schema, population or insert error that stopped the sequence.
    pub fn initialize(&self) -> Result<SeedOutcome, StorageError> {
        let _guard = self.seed.lock.lock().unwrap_or_else(PoisonError::into_inner);

        self.ensure_schema()?;

        let existing = self.count_universities()?;
        if existing > 0 {
            tracing::info!(rows = existing, "Database already populated");
            self.seed.seeded.store(true, Ordering::Release);
            return Ok(SeedOutcome::AlreadySeeded { rows: existing });
        }

        tracing::info!("Database is empty, populating");
        let records = self.seed.source.load().inspect_err(|e| {
            tracing::error!(error = %e, "Failed to load dataset");
        })?;
        let rows = self.populate(&records).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to populate database");
        })?;

        self.seed.seeded.store(true, Ordering::Release);
        Ok(SeedOutcome::Seeded { rows })
    }

    /// Run `initialize` unless a previous call on this handle already completed.
    ///
    /// # Errors
    /// Same as `initialize`.
    pub fn ensure_seeded(&self) -> Result<(), StorageError> {
        if self.seed.seeded.load(Ordering::Acquire) {
            return Ok(());
        }
        self.initialize().map(|_| ())
    }

    /// Current lifecycle state. Does not seed.
    ///
    /// # Errors
    /// Returns error if the schema cannot be ensured or the count fails.
    pub fn state(&self) -> Result<StoreState, StorageError> {
        self.ensure_schema()?;
        Ok(if self.is_populated()? { StoreState::Seeded } else { StoreState::Empty })
    }
}
