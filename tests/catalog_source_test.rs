use anyhow::Result;
use httpmock::prelude::*;
use parking_finder::adapters::CatalogFormat;
use parking_finder::utils::error::ErrorSeverity;
use parking_finder::{
    CatalogSource, FileCatalog, FinderError, HttpCatalog, IntentExtractor, ParkingFinder,
};
use std::time::Duration;
use tempfile::TempDir;

const SPOTS_JSON: &str = r#"[
  {"id": "a1", "name": "Dom Garage", "location": "Cologne Cathedral", "drivingTime": 7, "available": true, "price": "€6"},
  {"id": "a2", "name": "Lanxess Arena Parking", "location": "Deutz, Cologne", "drivingTime": 16, "available": false},
  {"id": "a3", "name": "Rheinauhafen Garage", "location": "Rheinauhafen, Cologne", "drivingTime": 7, "available": true}
]"#;

#[tokio::test]
async fn test_json_file_catalog_drives_search() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("spots.json");
    tokio::fs::write(&path, SPOTS_JSON).await?;

    let source = FileCatalog::new(&path)?;
    assert_eq!(source.format(), CatalogFormat::Json);

    let finder = ParkingFinder::from_source(&source, IntentExtractor::default()).await?;
    assert_eq!(finder.catalog().len(), 3);

    let outcome = finder.search("near Cologne in 20 minutes");
    let ids: Vec<&str> = outcome.spots.iter().map(|s| s.id.as_str()).collect();
    // a2 is unavailable; a1 and a3 tie and keep file order
    assert_eq!(ids, vec!["a1", "a3"]);
    Ok(())
}

#[tokio::test]
async fn test_csv_file_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("spots.csv");
    tokio::fs::write(
        &path,
        "id,name,location,drivingTime,available,price\n\
         1,Alexa Parking,\"Alexanderplatz, Berlin\",8,true,€6\n\
         2,Mall of Berlin Garage,\"Leipziger Platz, Berlin\",15,true,\n",
    )
    .await?;

    let catalog = FileCatalog::new(&path)?.load().await?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("2").and_then(|s| s.price.clone()), None);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_ids_are_rejected_at_load_time() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("spots.toml");
    tokio::fs::write(
        &path,
        r#"
[[spots]]
id = "7"
name = "MyZeil Parkhaus"
location = "Zeil, Frankfurt"
driving_time = 9
available = true

[[spots]]
id = "7"
name = "Hauptbahnhof Parkdeck"
location = "Frankfurt Central Station"
driving_time = 14
available = true
"#,
    )
    .await?;

    let result = FileCatalog::new(&path)?.load().await;
    assert!(matches!(result, Err(FinderError::DuplicateSpotId { ref id }) if id == "7"));
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = FileCatalog::new(temp_dir.path().join("absent.json"))?;

    assert!(matches!(source.load().await, Err(FinderError::IoError(_))));
    Ok(())
}

#[tokio::test]
async fn test_http_catalog_loads_spots() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/spots");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(SPOTS_JSON);
        })
        .await;

    let source = HttpCatalog::new(server.url("/spots"), Duration::from_secs(5))?;
    let finder = ParkingFinder::from_source(&source, IntentExtractor::default()).await?;

    api_mock.assert_async().await;
    assert_eq!(finder.catalog().len(), 3);
    assert_eq!(finder.search("to Cologne in 7 minutes").spots.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_http_catalog_error_status() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/spots");
            then.status(503);
        })
        .await;

    let source = HttpCatalog::new(server.url("/spots"), Duration::from_secs(5))?;
    let result = source.load().await;
    assert!(matches!(result, Err(FinderError::CatalogError { .. })));
    Ok(())
}

#[tokio::test]
async fn test_http_catalog_malformed_body() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/spots");
            then.status(200).body(r#"{"spots": "nope"}"#);
        })
        .await;

    let source = HttpCatalog::new(server.url("/spots"), Duration::from_secs(5))?;
    let err = source.load().await.unwrap_err();
    assert!(matches!(err, FinderError::SerializationError(_)));
    assert_eq!(err.severity(), ErrorSeverity::High);
    Ok(())
}
