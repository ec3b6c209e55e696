use crate::domain::model::{Catalog, Spot};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::validate_path;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["json", "csv", "toml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
    Toml,
}

impl CatalogFormat {
    /// Infers the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let display = path.to_string_lossy();
        validate_path("catalog.path", &display)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            Some("toml") => Ok(Self::Toml),
            other => Err(FinderError::InvalidConfigValueError {
                field: "catalog.path".to_string(),
                value: display.into_owned(),
                reason: format!(
                    "unsupported catalog extension {:?}; expected one of {}",
                    other.unwrap_or(""),
                    SUPPORTED_EXTENSIONS.join(", ")
                ),
            }),
        }
    }

    pub fn parse(self, content: &str) -> Result<Vec<Spot>> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Csv => {
                let mut reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_reader(content.as_bytes());
                let spots = reader.deserialize().collect::<std::result::Result<Vec<Spot>, _>>()?;
                Ok(spots)
            }
            Self::Toml => {
                let document: TomlCatalog = toml::from_str(content)?;
                Ok(document.spots)
            }
        }
    }
}

/// `[[spots]]` tables.
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    spots: Vec<Spot>,
}

/// Catalog stored in a local JSON, CSV or TOML file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = CatalogFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading {:?} catalog from {}", self.format, self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let spots = self.format.parse(&content)?;
        Catalog::new(spots)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("spots.json")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("data/spots.csv")).unwrap(),
            CatalogFormat::Csv
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("spots.toml")).unwrap(),
            CatalogFormat::Toml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("Spots.JSON")).unwrap(),
            CatalogFormat::Json
        );
        assert!(CatalogFormat::from_path(Path::new("spots.xml")).is_err());
        assert!(CatalogFormat::from_path(Path::new("spots")).is_err());
        assert!(CatalogFormat::from_path(Path::new("")).is_err());
    }

    #[test]
    fn test_parse_csv_with_optional_price() {
        let content = "id,name,location,driving_time,available,price\n\
                       1, Dom Garage ,Cologne Cathedral,7,true,€6\n\
                       2,Lanxess Arena Parking,\"Deutz, Cologne\",16,false,\n";
        let spots = CatalogFormat::Csv.parse(content).unwrap();

        assert_eq!(spots.len(), 2);
        assert_eq!(spots[0].name, "Dom Garage");
        assert_eq!(spots[0].price.as_deref(), Some("€6"));
        assert_eq!(spots[1].location, "Deutz, Cologne");
        assert!(!spots[1].available);
        assert_eq!(spots[1].price, None);
    }

    #[test]
    fn test_parse_toml_spots() {
        let content = r#"
[[spots]]
id = "1"
name = "Höfe am Brühl"
location = "Zentrum, Leipzig"
driving_time = 9
available = true
price = "€3"

[[spots]]
id = "2"
name = "Parkhaus Augustusplatz"
location = "Leipzig University"
drivingTime = 17
available = true
"#;
        let spots = CatalogFormat::Toml.parse(content).unwrap();
        assert_eq!(spots.len(), 2);
        assert_eq!(spots[1].driving_time, 17);
        assert_eq!(spots[1].price, None);
    }

    #[test]
    fn test_parse_json_rejects_negative_driving_time() {
        let content =
            r#"[{"id":"1","name":"A","location":"Munich","drivingTime":-4,"available":true}]"#;
        assert!(matches!(
            CatalogFormat::Json.parse(content),
            Err(FinderError::SerializationError(_))
        ));
    }
}
