use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::adapters::{CatalogFormat, FileCatalog, FixtureCatalog, HttpCatalog};
use crate::core::{CatalogSource, ExtractionRule, IntentDefaults, IntentExtractor};
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{
    require, validate_non_empty_string, validate_pattern, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// One day; larger defaults are almost certainly a typo.
const MAX_DEFAULT_TIME_BUDGET: u32 = 24 * 60;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinderConfig {
    #[serde(default)]
    pub intent: IntentConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentConfig {
    pub default_destination: Option<String>,
    pub default_time_budget: Option<u32>,
    pub extra_destination_patterns: Option<Vec<String>>,
    pub extra_time_patterns: Option<Vec<String>>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        let defaults = IntentDefaults::default();
        Self {
            default_destination: Some(defaults.destination),
            default_time_budget: Some(defaults.time_budget),
            extra_destination_patterns: None,
            extra_time_patterns: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    #[default]
    Fixture,
    File,
    Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: CatalogSourceKind,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl FinderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn intent_defaults(&self) -> IntentDefaults {
        let fallback = IntentDefaults::default();
        IntentDefaults {
            destination: self
                .intent
                .default_destination
                .clone()
                .unwrap_or(fallback.destination),
            time_budget: self
                .intent
                .default_time_budget
                .unwrap_or(fallback.time_budget),
        }
    }

    /// Built-in rules first, then any configured extras in file order.
    pub fn intent_extractor(&self) -> Result<IntentExtractor> {
        let mut extractor = IntentExtractor::new(self.intent_defaults());

        for pattern in self.intent.extra_destination_patterns.iter().flatten() {
            let regex = validate_pattern("intent.extra_destination_patterns", pattern)?;
            extractor.push_rule(ExtractionRule::destination(regex));
        }
        for pattern in self.intent.extra_time_patterns.iter().flatten() {
            let regex = validate_pattern("intent.extra_time_patterns", pattern)?;
            extractor.push_rule(ExtractionRule::time_budget(regex));
        }

        Ok(extractor)
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(
            self.catalog
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        match self.catalog.source {
            CatalogSourceKind::Fixture => Ok(Box::new(FixtureCatalog)),
            CatalogSourceKind::File => {
                let path = require("catalog.path", &self.catalog.path)?;
                Ok(Box::new(FileCatalog::new(path)?))
            }
            CatalogSourceKind::Http => {
                let endpoint = require("catalog.endpoint", &self.catalog.endpoint)?;
                Ok(Box::new(HttpCatalog::new(
                    endpoint.clone(),
                    self.catalog_timeout(),
                )?))
            }
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(destination) = &self.intent.default_destination {
            validate_non_empty_string("intent.default_destination", destination)?;
        }
        if let Some(budget) = self.intent.default_time_budget {
            validate_range(
                "intent.default_time_budget",
                budget,
                0..=MAX_DEFAULT_TIME_BUDGET,
            )?;
        }
        for pattern in self.intent.extra_destination_patterns.iter().flatten() {
            validate_pattern("intent.extra_destination_patterns", pattern)?;
        }
        for pattern in self.intent.extra_time_patterns.iter().flatten() {
            validate_pattern("intent.extra_time_patterns", pattern)?;
        }

        match self.catalog.source {
            CatalogSourceKind::Fixture => {}
            CatalogSourceKind::File => {
                let path = require("catalog.path", &self.catalog.path)?;
                CatalogFormat::from_path(Path::new(path))?;
            }
            CatalogSourceKind::Http => {
                let endpoint = require("catalog.endpoint", &self.catalog.endpoint)?;
                validate_url("catalog.endpoint", endpoint)?;
            }
        }

        if let Some(timeout) = self.catalog.timeout_seconds {
            validate_range("catalog.timeout_seconds", timeout, 1..=300)?;
        }

        Ok(())
    }
}

impl Validate for FinderConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
