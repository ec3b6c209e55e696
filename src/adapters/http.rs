use crate::domain::model::{Catalog, Spot};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Catalog served by a remote endpoint as a JSON array of spots.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoint: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("catalog.endpoint", &endpoint)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Making catalog request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            return Err(FinderError::CatalogError {
                message: format!("{} responded with status {}", self.endpoint, status),
            });
        }

        let body = response.text().await?;
        let spots: Vec<Spot> = serde_json::from_str(&body)?;
        Catalog::new(spots)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
