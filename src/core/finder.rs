use crate::core::{CatalogSource, IntentExtractor, SpotMatcher};
use crate::domain::model::{Catalog, Query, SearchOutcome};
use crate::utils::error::Result;

/// Runs the full search: intent extraction, then matching and ranking against a
/// catalog that stays fixed for the finder's lifetime.
#[derive(Debug, Clone)]
pub struct ParkingFinder {
    catalog: Catalog,
    extractor: IntentExtractor,
    matcher: SpotMatcher,
}

impl ParkingFinder {
    pub fn new(catalog: Catalog, extractor: IntentExtractor) -> Self {
        Self {
            catalog,
            extractor,
            matcher: SpotMatcher::new(),
        }
    }

    pub async fn from_source<S: CatalogSource + ?Sized>(
        source: &S,
        extractor: IntentExtractor,
    ) -> Result<Self> {
        tracing::info!("Loading parking catalog from {}", source.describe());
        let catalog = source.load().await?;
        tracing::info!("Loaded {} parking spots", catalog.len());
        Ok(Self::new(catalog, extractor))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn extractor(&self) -> &IntentExtractor {
        &self.extractor
    }

    pub fn extract(&self, command: &str) -> Query {
        self.extractor.extract(command.trim())
    }

    pub fn rank(&self, query: &Query) -> SearchOutcome<'_> {
        SearchOutcome {
            query: query.clone(),
            spots: self.matcher.rank(query, self.catalog.spots()),
        }
    }

    pub fn search(&self, command: &str) -> SearchOutcome<'_> {
        let query = self.extract(command);
        let outcome = self.rank(&query);
        tracing::debug!(
            command,
            destination = %outcome.query.destination,
            time_budget = outcome.query.time_budget,
            results = outcome.spots.len(),
            "Search finished"
        );
        outcome
    }
}
