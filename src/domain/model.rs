use crate::utils::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A parking spot as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Static travel time in minutes; never computed.
    #[serde(alias = "driving_time")]
    pub driving_time: u32,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Structured search intent pulled out of a free-text command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub destination: String,
    #[serde(rename = "timeConstraint", alias = "time_budget")]
    pub time_budget: u32,
}

impl Query {
    pub fn new(destination: impl Into<String>, time_budget: u32) -> Self {
        Self {
            destination: destination.into(),
            time_budget,
        }
    }

    pub fn normalized_destination(&self) -> String {
        self.destination.to_lowercase()
    }
}

/// Read-only, ordered set of spots. Order is significant: it breaks ties when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    spots: Vec<Spot>,
}

impl Catalog {
    /// Builds a catalog, rejecting entries with empty/duplicate ids or empty names.
    pub fn new(spots: Vec<Spot>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(spots.len());

        for (index, spot) in spots.iter().enumerate() {
            if spot.id.trim().is_empty() {
                return Err(FinderError::CatalogError {
                    message: format!("spot at position {} has an empty id", index),
                });
            }
            if spot.name.trim().is_empty() {
                return Err(FinderError::CatalogError {
                    message: format!("spot '{}' has an empty name", spot.id),
                });
            }
            if !seen.insert(spot.id.as_str()) {
                return Err(FinderError::DuplicateSpotId {
                    id: spot.id.clone(),
                });
            }
        }

        Ok(Self { spots })
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }
}

/// Result of one search: the query that was run and the ranked spots it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<'a> {
    pub query: Query,
    pub spots: Vec<&'a Spot>,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(id: &str, name: &str) -> Spot {
        Spot {
            id: id.to_string(),
            name: name.to_string(),
            location: "Altstadt, Munich".to_string(),
            driving_time: 10,
            available: true,
            price: None,
        }
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![spot("1", "A"), spot("2", "B"), spot("1", "C")]);
        assert!(matches!(result, Err(FinderError::DuplicateSpotId { id }) if id == "1"));
    }

    #[test]
    fn test_catalog_rejects_empty_id_and_name() {
        assert!(matches!(
            Catalog::new(vec![spot(" ", "A")]),
            Err(FinderError::CatalogError { .. })
        ));
        assert!(matches!(
            Catalog::new(vec![spot("1", "")]),
            Err(FinderError::CatalogError { .. })
        ));
    }

    #[test]
    fn test_catalog_preserves_order_and_lookup() {
        let catalog = Catalog::new(vec![spot("b", "B"), spot("a", "A")]).unwrap();
        let ids: Vec<&str> = catalog.spots().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.get("a").map(|s| s.name.as_str()), Some("A"));
        assert!(catalog.get("z").is_none());
    }

    #[test]
    fn test_spot_accepts_camel_and_snake_case() {
        let camel: Spot = serde_json::from_str(
            r#"{"id":"1","name":"A","location":"X","drivingTime":5,"available":true,"price":"€2"}"#,
        )
        .unwrap();
        let snake: Spot = serde_json::from_str(
            r#"{"id":"1","name":"A","location":"X","driving_time":5,"available":true,"price":"€2"}"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn test_query_serializes_time_constraint() {
        let value = serde_json::to_value(Query::new("Munich", 30)).unwrap();
        assert_eq!(value, serde_json::json!({"destination": "Munich", "timeConstraint": 30}));

        let parsed: Query =
            serde_json::from_str(r#"{"destination":"Berlin","time_budget":10}"#).unwrap();
        assert_eq!(parsed, Query::new("Berlin", 10));
    }

    #[test]
    fn test_query_normalizes_destination() {
        assert_eq!(Query::new("MüNCHEN", 5).normalized_destination(), "münchen");
    }
}
