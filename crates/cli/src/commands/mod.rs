pub(crate) mod query;
pub(crate) mod serve;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use unidir_core::UniversityDirectory;
use unidir_remote::RemoteDirectory;
use unidir_storage::{DatasetSource, Storage};

use crate::config::{Config, ensure_db_dir};

/// Open the local store. Schema and seed are applied lazily by the first query.
pub(crate) fn open_storage(config: &Config) -> Result<Storage> {
    ensure_db_dir(&config.db_path)?;
    Ok(Storage::open(&config.db_path, DatasetSource::file(&config.dataset_path))?)
}

/// Local store or remote client, depending on `--remote`.
pub(crate) fn open_directory(config: &Config) -> Result<Arc<dyn UniversityDirectory>> {
    if config.remote {
        tracing::info!(api_url = %config.api_url, "Using remote directory");
        Ok(Arc::new(RemoteDirectory::new(config.api_url.clone())?))
    } else {
        Ok(Arc::new(open_storage(config)?))
    }
}

/// Race `fut` against the configured deadline. The directory itself has no
/// timeout; on expiry the pending call is dropped and its result discarded.
pub(crate) async fn with_deadline<T, F>(timeout_secs: Option<u64>, fut: F) -> Result<T>
where
    F: Future<Output = unidir_core::Result<T>>,
{
    match timeout_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), fut)
            .await
            .map_err(|_| anyhow!("operation timed out after {secs}s"))?
            .map_err(Into::into),
        None => fut.await.map_err(Into::into),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
