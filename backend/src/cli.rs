use clap::{Parser, ValueEnum};
use zvonko_core::catalog::{CatalogQuery, PlatformFilter, SortKey};

use crate::config::DashboardConfig;

/// zvonko - artist dashboard for the zvonko digital portal
#[derive(Parser, Debug)]
#[command(name = "zvonko")]
#[command(version, about, long_about = None)]
pub struct Cli {
  /// Search by title, artist name or UPC
  #[arg(short, long, default_value = "")]
  pub search: String,

  /// Platform name, or "all" (defaults to the configured platform)
  #[arg(short, long)]
  pub platform: Option<String>,

  /// Sort key: created_date or release_date (defaults to the configured key)
  #[arg(long)]
  pub sort: Option<String>,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
  #[arg(long)]
  pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  Text,
  Json,
}

impl Cli {
  /// Combina los argumentos con los valores por defecto de la configuración.
  pub fn query(&self, config: &DashboardConfig) -> CatalogQuery {
    let platform = match &self.platform {
      Some(name) => PlatformFilter::from(name.clone()),
      None => config.platform_filter(),
    };

    let sort = match &self.sort {
      Some(key) => SortKey::from(key.clone()),
      None => config.sort_key(),
    };

    CatalogQuery::new().search(self.search.clone()).platform(platform).sort_by(sort)
  }

  pub fn log_level<'a>(&'a self, config: &'a DashboardConfig) -> &'a str {
    self.log_level.as_deref().unwrap_or(&config.log_level)
  }
}
