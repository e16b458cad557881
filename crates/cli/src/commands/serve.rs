use std::sync::Arc;

use anyhow::Result;
use unidir_core::UniversityDirectory;
use unidir_http::{AppState, create_router};

use super::{open_directory, open_storage};
use crate::config::Config;

pub(crate) async fn run_server(config: &Config, host: &str, port: u16) -> Result<()> {
    let directory: Arc<dyn UniversityDirectory> = if config.remote {
        open_directory(config)?
    } else {
        let storage = open_storage(config)?;
        // A failed seed is not fatal: every query retries it until it succeeds.
        match storage.initialize_async().await {
            Ok(outcome) => tracing::info!(rows = outcome.rows(), "Directory ready"),
            Err(e) => tracing::warn!(error = %e, "Initial seed failed, will retry on first query"),
        }
        Arc::new(storage)
    };

    let router = create_router(Arc::new(AppState::new(directory)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
