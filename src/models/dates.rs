use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::AppError;

const FORM_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses an optional `YYYY-MM-DD` field. Blank input is treated as absent.
pub fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::Validation(format!("{field} must be a date (YYYY-MM-DD)")))
}

/// Parses an RFC 3339 timestamp, falling back to a zone-less form value read as local time.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let invalid = || AppError::Validation(format!("{field} must be a date and time"));
    let naive = FORM_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(invalid)?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(invalid)
}
