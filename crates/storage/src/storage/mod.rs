//! `SQLite` storage implementation
//!
//! All methods are synchronous; `sqlite_async` exposes them to async callers.

// SQLite uses i64 for counts/limits, Rust uses u32/u64 - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust integer conversions are safe within DB row counts"
)]

mod seed;
mod stats;
mod universities;

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;

use r2d2::{ManageConnection as _, Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use unidir_core::{DEFAULT_DB_POOL_SIZE, env_parse_with_default};

use crate::dataset::DatasetSource;
use crate::error::StorageError;

const MEMORY_PATH: &str = ":memory:";

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Seeding state shared by every clone of a `Storage` handle.
///
/// `lock` makes `initialize` single-flight per store; `seeded` is the fast
/// path that lets queries skip the lock once a seed has completed.
pub(crate) struct SeedState {
    pub(crate) source: DatasetSource,
    pub(crate) lock: Mutex<()>,
    pub(crate) seeded: AtomicBool,
}

impl fmt::Debug for SeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedState")
            .field("source", &self.source)
            .field("seeded", &self.seeded)
            .finish_non_exhaustive()
    }
}

/// Owned handle to the university store: a connection pool plus the dataset
/// it seeds itself from. Clones share the pool and the seeding state.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
    pub(crate) seed: Arc<SeedState>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(StorageError::Pool)
}

/// Concurrency settings for file-backed connections
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )
}

fn db_pool_size() -> u32 {
    env_parse_with_default("UNIDIR_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Open (or create) the store at `db_path`. The schema is not touched until
    /// `initialize` or the first query. `:memory:` is routed to [`Storage::in_memory`].
    ///
    /// # Errors
    /// Returns `StorageError::Schema` if the database cannot be opened.
    pub fn open(db_path: &Path, source: DatasetSource) -> Result<Self, StorageError> {
        if db_path == Path::new(MEMORY_PATH) {
            return Self::in_memory(source);
        }

        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        // Surface the real SQLite error instead of waiting out the pool timeout.
        manager.connect().map_err(|e| StorageError::schema("open database", e))?;
        let pool_size = db_pool_size();
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(|e| StorageError::schema("open connection pool", e))?;

        tracing::info!(pool_size, path = %db_path.display(), "Storage opened with connection pool");

        Ok(Self::from_pool(pool, source))
    }

    /// Private in-memory store. The pool holds a single connection that is
    /// never recycled, because every `:memory:` connection is its own database.
    ///
    /// # Errors
    /// Returns `StorageError::Schema` if `SQLite` cannot allocate the database.
    pub fn in_memory(source: DatasetSource) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .max_lifetime(None)
            .idle_timeout(None)
            .build(manager)
            .map_err(|e| StorageError::schema("open in-memory database", e))?;

        Ok(Self::from_pool(pool, source))
    }

    fn from_pool(pool: Pool<SqliteConnectionManager>, source: DatasetSource) -> Self {
        Self {
            pool,
            seed: Arc::new(SeedState {
                source,
                lock: Mutex::new(()),
                seeded: AtomicBool::new(false),
            }),
        }
    }
}
