//! catalog-harvest binary.
//!
//! Reads `catalog.toml` (or the path given with `--config`) plus `CATALOG_*`
//! environment variables, loads the institute registry, harvests every
//! institute and rewrites the catalog snapshot.
//!
//! ```
//! cargo run -p catalog-harvest
//! RUST_LOG=debug cargo run -p catalog-harvest -- --config ./catalog.toml
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use catalog_harvest::{HarvestConfig, Harvester, load_institutes};
use catalog_sources::HttpFetcher;
use catalog_store_json::JsonFileStore;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Harvest education institute listings into one catalog")]
struct Cli {
  /// Path to the optional TOML configuration file.
  #[arg(short, long, default_value = "catalog.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let cfg = HarvestConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let institutes = load_institutes(&cfg.registry_path)
    .await
    .context("cannot harvest without an institute registry")?;
  tracing::info!(
    institutes = institutes.len(),
    store = ?cfg.store_path,
    "starting harvest"
  );

  let fetcher = HttpFetcher::new(cfg.request_timeout(), &cfg.user_agent)
    .context("failed to build HTTP fetcher")?;
  let store = JsonFileStore::new(&cfg.store_path);

  Harvester::new(fetcher, store)
    .with_delay(cfg.delay())
    .run(&institutes)
    .await
    .context("harvest failed")?;

  Ok(())
}
