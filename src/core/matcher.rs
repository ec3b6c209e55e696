use crate::domain::model::{Query, Spot};

/// Filters a catalog down to the spots a query can use and ranks them by travel time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotMatcher;

impl SpotMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Keeps spots that are available, whose location contains the destination
    /// (case-insensitive substring) and that fit the time budget, nearest first.
    /// Spots with equal travel time keep their catalog order.
    pub fn rank<'a>(&self, query: &Query, spots: &'a [Spot]) -> Vec<&'a Spot> {
        let destination = query.normalized_destination();

        let mut candidates: Vec<&Spot> = spots
            .iter()
            .filter(|spot| Self::is_candidate(spot, &destination, query.time_budget))
            .collect();

        // stable
        candidates.sort_by_key(|spot| spot.driving_time);

        tracing::debug!(
            destination = %query.destination,
            time_budget = query.time_budget,
            catalog_size = spots.len(),
            matches = candidates.len(),
            "Ranked parking spots"
        );

        candidates
    }

    fn is_candidate(spot: &Spot, normalized_destination: &str, time_budget: u32) -> bool {
        spot.available
            && spot.driving_time <= time_budget
            && spot.location.to_lowercase().contains(normalized_destination)
    }
}
