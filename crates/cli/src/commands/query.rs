use anyhow::Result;
use unidir_core::{CountryFilter, PageRequest};

use super::{open_directory, open_storage, print_json, with_deadline};
use crate::config::Config;

pub(crate) async fn run_seed(config: &Config) -> Result<()> {
    let storage = open_storage(config)?;
    let outcome = storage.initialize_async().await?;
    print_json(&outcome)
}

pub(crate) async fn run_countries(config: &Config) -> Result<()> {
    let directory = open_directory(config)?;
    let countries = with_deadline(config.timeout_secs, directory.list_countries()).await?;
    print_json(&countries)
}

pub(crate) async fn run_list(
    config: &Config,
    country: Option<String>,
    page: u32,
    limit: u32,
) -> Result<()> {
    let directory = open_directory(config)?;
    let filter = CountryFilter::from(country);
    let request = PageRequest::new(page, limit);
    let items =
        with_deadline(config.timeout_secs, directory.list_universities(&filter, request)).await?;
    print_json(&items)
}

pub(crate) async fn run_stats(config: &Config) -> Result<()> {
    let storage = open_storage(config)?;
    let stats = tokio::task::spawn_blocking(move || storage.get_stats()).await??;
    print_json(&stats)
}
