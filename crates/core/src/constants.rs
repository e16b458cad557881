//! Shared constants for unidir.

/// Default page size when the caller does not pass a limit.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Upper bound on a single page (DoS protection for the HTTP surface).
pub const MAX_PAGE_LIMIT: u32 = 500;

/// Default SQLite connection pool size.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Default base URL of the hipolabs-style search API.
pub const DEFAULT_API_URL: &str = "http://universities.hipolabs.com";

/// File name of the bundled dataset.
pub const DATASET_FILE_NAME: &str = "universities.json";
