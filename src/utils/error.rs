use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Catalog request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Duplicate spot id in catalog: {id}")]
    DuplicateSpotId { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Parsing,
    Configuration,
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::HttpError(_) => ErrorCategory::Network,
            FinderError::IoError(_) => ErrorCategory::Io,
            FinderError::CsvError(_)
            | FinderError::SerializationError(_)
            | FinderError::TomlError(_) => ErrorCategory::Parsing,
            FinderError::ConfigError { .. }
            | FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FinderError::CatalogError { .. } | FinderError::DuplicateSpotId { .. } => {
                ErrorCategory::Catalog
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // remote catalogs are usually worth retrying
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parsing | ErrorCategory::Catalog | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FinderError::HttpError(_) => {
                "Check that the catalog endpoint is reachable and returns a JSON array of spots"
            }
            FinderError::IoError(_) => "Check that the file exists and is readable",
            FinderError::CsvError(_) => {
                "Check the CSV header: id,name,location,driving_time,available,price"
            }
            FinderError::SerializationError(_) => "Check that the catalog is a JSON array of spots",
            FinderError::TomlError(_) => "Check the TOML syntax of the file",
            FinderError::ConfigError { .. }
            | FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and try again"
            }
            FinderError::MissingConfigError { .. } => "Add the missing setting to the config file",
            FinderError::CatalogError { .. } => "Fix the reported catalog entry",
            FinderError::DuplicateSpotId { .. } => "Give every spot in the catalog a unique id",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch the parking catalog: {}", self),
            ErrorCategory::Io => format!("Could not read a required file: {}", self),
            ErrorCategory::Parsing => format!("Could not parse input data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Catalog => format!("Invalid parking catalog: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_are_high_severity() {
        let err = FinderError::DuplicateSpotId { id: "7".to_string() };
        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("Duplicate spot id in catalog: 7"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: FinderError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "catalog.json").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
