use chrono::NaiveDate;

use crate::server::error::workshop::WorkshopError;

/// Parses a required ISO-8601 calendar date.
///
/// Empty and whitespace-only values count as missing.
///
/// # Arguments
/// - `value` - The raw date string, if one was supplied
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(WorkshopError::DateRequired)` - No value was supplied
/// - `Err(WorkshopError::InvalidDate)` - Value is not a `YYYY-MM-DD` date
pub fn parse_required_date(value: Option<&str>) -> Result<NaiveDate, WorkshopError> {
    parse_optional_date(value)?.ok_or(WorkshopError::DateRequired)
}

/// Parses an optional ISO-8601 calendar date.
///
/// # Returns
/// - `Ok(Some(NaiveDate))` - Successfully parsed date
/// - `Ok(None)` - No value was supplied
/// - `Err(WorkshopError::InvalidDate)` - Value is not a `YYYY-MM-DD` date
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, WorkshopError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| WorkshopError::InvalidDate(raw.to_string())),
    }
}
