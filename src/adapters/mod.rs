// Adapters layer: catalog sources backed by the built-in fixture, local files, or HTTP.

pub mod file;
pub mod fixture;
pub mod http;

pub use file::{CatalogFormat, FileCatalog};
pub use fixture::FixtureCatalog;
pub use http::HttpCatalog;
