//! Typed error enum for the storage layer.
//!
//! One variant per failure class of the loader and the query service, so
//! callers can tell a broken dataset from a broken store without downcasting.

use thiserror::Error;
use unidir_core::DirectoryError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Store could not be opened or the DDL was rejected.
    #[error("schema error while trying to {context}: {source}")]
    Schema {
        context: &'static str,
        #[source]
        source: BoxError,
    },

    /// Dataset missing or unparsable. Raised before any row is written.
    #[error("population error in {context}: {source}")]
    Population {
        context: String,
        #[source]
        source: BoxError,
    },

    /// A row (or the commit) failed during the bulk seed; the transaction was rolled back.
    #[error("insert error at {context}: {source}")]
    Insert {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    /// SQL failure on a read.
    #[error("query error: {0}")]
    Query(#[source] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// The blocking task running a store call panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(String),
}

impl StorageError {
    pub(crate) fn schema(
        context: &'static str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Schema { context, source: source.into() }
    }

    pub(crate) fn population(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Population { context: context.into(), source: source.into() }
    }

    /// Whether this is a read-side failure (SQL, pool or task).
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_) | Self::Pool(_) | Self::Join(_))
    }
}

/// Reads default to `Query`; the loader maps its own failures explicitly.
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Query(err)
    }
}

impl From<StorageError> for DirectoryError {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        match err {
            StorageError::Schema { .. } => Self::Schema(message),
            StorageError::Population { .. } => Self::Population(message),
            StorageError::Insert { .. } => Self::Insert(message),
            StorageError::Query(_) | StorageError::Pool(_) | StorageError::Join(_) => {
                Self::Query(message)
            },
        }
    }
}
