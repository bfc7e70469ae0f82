mod cli;
pub mod config;
mod render;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use zvonko_core::services::DashboardService;
use zvonko_fixtures::StaticCatalog;

use crate::cli::{Cli, OutputFormat};
use crate::config::DashboardConfig;

/// Level used when `RUST_LOG` is unset. Anything `LevelFilter` cannot parse
/// falls back to `warn`.
fn default_level(level: &str) -> LevelFilter {
  level.trim().parse().unwrap_or(LevelFilter::WARN)
}

/// Logs go to stderr so `--format json` output stays machine-readable.
fn init_tracing(level: &str) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level(level).into()));

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
    .init();
}

/// Entry point: parse arguments, wire the adapters into the core service and
/// print the dashboard for the requested query.
pub async fn run() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let config = DashboardConfig::load().context("failed to load [dashboard] config")?;
  init_tracing(cli.log_level(&config));

  // --- Dependency Injection Phase ---
  // The static catalog stands in for the portal API client.
  let service = DashboardService::new(StaticCatalog::new());
  let dashboard = service.load().await.context("failed to load dashboard data")?;

  let query = cli.query(&config);
  debug!(?query, "rendering dashboard");
  let view = dashboard.view(&query);

  let output = match cli.format {
    OutputFormat::Text => render::text(&view),
    OutputFormat::Json => render::json(&view).context("failed to encode dashboard as json")?,
  };
  println!("{output}");

  Ok(())
}
