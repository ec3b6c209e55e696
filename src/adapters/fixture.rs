use crate::domain::model::{Catalog, Spot};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reference catalog: two spots in each of eight German cities.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCatalog;

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn load(&self) -> Result<Catalog> {
        reference_catalog()
    }

    fn describe(&self) -> String {
        "built-in reference catalog".to_string()
    }
}

pub fn reference_catalog() -> Result<Catalog> {
    Catalog::new(reference_spots())
}

pub fn reference_spots() -> Vec<Spot> {
    [
        ("1", "Parkhaus Altstadt", "Altstadt, Munich", 10, "€7"),
        ("2", "P+R Fröttmaning", "Fröttmaning, Munich", 18, "€1"),
        ("3", "Alexa Parking", "Alexanderplatz, Berlin", 8, "€6"),
        ("4", "Mall of Berlin Garage", "Leipziger Platz, Berlin", 15, "€5"),
        ("5", "Contipark Tiefgarage", "Hafencity, Hamburg", 12, "€4"),
        ("6", "Q-Park City", "Innenstadt, Hamburg", 20, "€3"),
        ("7", "MyZeil Parkhaus", "Zeil, Frankfurt", 9, "€6"),
        ("8", "Hauptbahnhof Parkdeck", "Frankfurt Central Station", 14, "€5"),
        ("9", "Dom Garage", "Cologne Cathedral", 7, "€6"),
        ("10", "Lanxess Arena Parking", "Deutz, Cologne", 16, "€4"),
        ("11", "Milaneo Center Parking", "Stuttgart Mitte", 10, "€5"),
        ("12", "Airport Parking", "Stuttgart Airport", 25, "€8"),
        ("13", "Kö-Bogen Parkhaus", "Königsallee, Düsseldorf", 11, "€6"),
        ("14", "Altstadt Garage", "Old Town, Düsseldorf", 13, "€4"),
        ("15", "Höfe am Brühl", "Zentrum, Leipzig", 9, "€3"),
        ("16", "Parkhaus Augustusplatz", "Leipzig University", 17, "€4"),
    ]
    .into_iter()
    .map(|(id, name, location, driving_time, price)| Spot {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        driving_time,
        available: true,
        price: Some(price.to_string()),
    })
    .collect()
}
