mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "unidir")]
#[command(about = "Browse universities by country from a seeded local database", long_about = None)]
struct Cli {
    /// SQLite database file (default: $UNIDIR_DB_PATH or the local data dir)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Bundled dataset used for the first seed (default: $UNIDIR_DATASET or ./universities.json)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    /// Answer `countries` and `list` from the remote search API instead of the local store
    #[arg(long, global = true)]
    remote: bool,
    /// Remote API base URL (default: $UNIDIR_API_URL or the public hipolabs endpoint)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Give up on a query after this many seconds; a late result is discarded
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema and seed the store if it is empty
    Seed,
    /// List distinct countries
    Countries,
    /// List one page of universities
    List {
        #[arg(short, long)]
        country: Option<String>,
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },
    /// Row and country counts of the local store
    Stats,
    /// Serve the directory over HTTP
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.db, cli.dataset, cli.remote, cli.api_url, cli.timeout_secs);

    match cli.command {
        Commands::Seed => commands::query::run_seed(&config).await,
        Commands::Countries => commands::query::run_countries(&config).await,
        Commands::List { country, page, limit } => {
            commands::query::run_list(&config, country, page, limit).await
        },
        Commands::Stats => commands::query::run_stats(&config).await,
        Commands::Serve { port, host } => commands::serve::run_server(&config, &host, port).await,
    }
}
