pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileCatalog, FixtureCatalog, HttpCatalog};
pub use config::FinderConfig;
pub use crate::core::{
    Catalog, CatalogSource, IntentDefaults, IntentExtractor, ParkingFinder, Query,
    SearchOutcome, Spot, SpotMatcher,
};
pub use utils::error::{FinderError, Result};
