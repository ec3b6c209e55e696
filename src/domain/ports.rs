use crate::domain::model::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the catalog comes from. Loading happens once, before any search runs.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;

    /// Short label for logs, e.g. a file path or URL.
    fn describe(&self) -> String;
}
