use crate::utils::error::{FinderError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> FinderError {
    FinderError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses `value` as an http(s) URL.
pub fn validate_url(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| invalid(field, value, format!("not a URL: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(field, value, format!("expected http or https, got {}", other))),
    }
}

pub fn validate_path(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() || path.contains('\0') {
        return Err(invalid(field, path, "path must be non-blank and free of NUL bytes"));
    }
    Ok(())
}

pub fn require<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FinderError::MissingConfigError {
        field: field.to_string(),
    })
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "must not be blank"));
    }
    Ok(())
}

pub fn validate_range<T>(field: &str, value: T, bounds: std::ops::RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if !bounds.contains(&value) {
        let reason = format!("expected {}..={}", bounds.start(), bounds.end());
        return Err(invalid(field, value, reason));
    }
    Ok(())
}

/// Compiles `pattern` and checks it has a capture group to pull a value from.
pub fn validate_pattern(field: &str, pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern)
        .map_err(|e| invalid(field, pattern, format!("invalid regular expression: {}", e)))?;

    if regex.captures_len() < 2 {
        return Err(invalid(field, pattern, "pattern needs a capture group"));
    }
    Ok(regex)
}
