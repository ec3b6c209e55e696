pub mod finder;
pub mod intent;
pub mod matcher;

pub use crate::domain::model::{Catalog, Query, SearchOutcome, Spot};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
pub use finder::ParkingFinder;
pub use intent::{ExtractionRule, IntentDefaults, IntentExtractor};
pub use matcher::SpotMatcher;
