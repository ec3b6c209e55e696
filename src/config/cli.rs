use crate::config::toml_config::{CatalogSourceKind, FinderConfig, OutputFormat};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "parking-finder")]
#[command(about = "Find parking from a free-text request, e.g. \"find parking near Munich in 30 minutes\"")]
pub struct CliConfig {
    /// Search command; all words are joined with spaces
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Load the catalog from a JSON, CSV or TOML file
    #[arg(long, conflicts_with = "catalog_url")]
    pub catalog: Option<String>,

    /// Load the catalog from an HTTP endpoint returning a JSON array
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Destination used when the command names none
    #[arg(long)]
    pub default_destination: Option<String>,

    /// Time budget used when the command gives none
    #[arg(long)]
    pub default_minutes: Option<u32>,

    /// Read one command per line from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn command_text(&self) -> String {
        self.command.join(" ")
    }

    /// Command-line flags take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut FinderConfig) {
        if let Some(path) = &self.catalog {
            config.catalog.source = CatalogSourceKind::File;
            config.catalog.path = Some(path.clone());
        }
        if let Some(endpoint) = &self.catalog_url {
            config.catalog.source = CatalogSourceKind::Http;
            config.catalog.endpoint = Some(endpoint.clone());
        }
        if let Some(destination) = &self.default_destination {
            config.intent.default_destination = Some(destination.clone());
        }
        if let Some(minutes) = self.default_minutes {
            config.intent.default_time_budget = Some(minutes);
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
    }
}
