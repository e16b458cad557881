//! Resolved runtime configuration: CLI flags first, then environment, then defaults.

use std::path::{Path, PathBuf};

use anyhow::Result;
use unidir_core::{DATASET_FILE_NAME, DEFAULT_API_URL, env_non_empty};

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub db_path: PathBuf,
    pub dataset_path: PathBuf,
    pub remote: bool,
    pub api_url: String,
    pub timeout_secs: Option<u64>,
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("unidir")
        .join("universities.db")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env_non_empty(var).map(PathBuf::from)
}

impl Config {
    pub(crate) fn resolve(
        db: Option<PathBuf>,
        dataset: Option<PathBuf>,
        remote: bool,
        api_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        let db_path = db.or_else(|| env_path("UNIDIR_DB_PATH")).unwrap_or_else(default_db_path);
        let dataset_path = dataset
            .or_else(|| env_path("UNIDIR_DATASET"))
            .unwrap_or_else(|| PathBuf::from(DATASET_FILE_NAME));
        let api_url = api_url
            .or_else(|| env_non_empty("UNIDIR_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Self { db_path, dataset_path, remote, api_url, timeout_secs }
    }
}

/// Create the parent directory of the database file if needed.
pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
