//! # Temporal Types
//!
//! - [`Timestamp`]: UTC-only, truncated to seconds. Used for save times and
//!   anything else the workbench records.
//! - [`FilterDate`]: a dashboard date filter value. Parsing never fails; a
//!   malformed value is kept verbatim as [`FilterDate::Invalid`] and written
//!   back unchanged, the way a browser keeps an "Invalid Date" around.
//!
//! Filter dates travel through URLs as `YYYY-MM-DD`. The time-of-day of a
//! valid date is dropped on the way out, so a date-time survives a URL
//! round-trip only at day precision.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QmsError;

/// Query-string date format.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// A UTC-only timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 string, accepting any offset and converting to UTC.
    pub fn parse(s: &str) -> Result<Self, QmsError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| QmsError::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── Filter dates ────────────────────────────────────────────────────

/// A date filter value as carried by a dashboard URL.
///
/// Serializes (serde) to the same string that goes into the query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterDate {
    /// A parsed instant. Only the UTC calendar date is ever written out.
    Valid(DateTime<Utc>),
    /// Unparseable input, kept as given.
    Invalid(String),
}

impl FilterDate {
    /// Parse a filter date. Never fails.
    ///
    /// Accepts a bare `YYYY-MM-DD` (midnight UTC) or an RFC 3339 date-time.
    /// Anything else becomes [`FilterDate::Invalid`].
    pub fn parse(raw: &str) -> Self {
        if let Ok(date) = NaiveDate::parse_from_str(raw, QUERY_DATE_FORMAT) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Self::Valid(midnight.and_utc());
            }
        }
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Self::Valid(dt.with_timezone(&Utc)),
            Err(_) => Self::Invalid(raw.to_string()),
        }
    }

    /// A filter date at midnight UTC of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.and_hms_opt(0, 0, 0) {
            Some(midnight) => Self::Valid(midnight.and_utc()),
            None => Self::Invalid(date.to_string()),
        }
    }

    /// The UTC calendar date, if valid.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(dt) => Some(dt.date_naive()),
            Self::Invalid(_) => None,
        }
    }

    /// Whether the value parsed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The query-string form: `YYYY-MM-DD`, or the raw text when invalid.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Valid(dt) => dt.format(QUERY_DATE_FORMAT).to_string(),
            Self::Invalid(raw) => raw.clone(),
        }
    }
}

impl From<String> for FilterDate {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<FilterDate> for String {
    fn from(date: FilterDate) -> Self {
        date.to_query_value()
    }
}

impl From<NaiveDate> for FilterDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl std::fmt::Display for FilterDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(123_456_789).unwrap());
        assert_eq!(ts.as_datetime().nanosecond(), 0);
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn test_parse_converts_offset() {
        let ts = Timestamp::parse("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_string(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Timestamp::parse("yesterday").is_err());
    }

    // ---- FilterDate ----

    #[test]
    fn test_filter_date_bare_date_is_midnight_utc() {
        let d = FilterDate::parse("2025-03-31");
        let expected = Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap();
        assert_eq!(d, FilterDate::Valid(expected));
        assert_eq!(d.to_query_value(), "2025-03-31");
    }

    #[test]
    fn test_filter_date_datetime_truncated_on_output() {
        let d = FilterDate::parse("2025-03-31T18:45:00Z");
        assert!(d.is_valid());
        assert_eq!(d.to_query_value(), "2025-03-31");
    }

    #[test]
    fn test_filter_date_offset_uses_utc_day() {
        // 01:00 at +02:00 is still the previous day in UTC.
        let d = FilterDate::parse("2025-04-01T01:00:00+02:00");
        assert_eq!(d.to_query_value(), "2025-03-31");
    }

    #[test]
    fn test_filter_date_malformed_kept_verbatim() {
        let d = FilterDate::parse("31/03/2025");
        assert_eq!(d, FilterDate::Invalid("31/03/2025".to_string()));
        assert!(d.date().is_none());
        assert_eq!(d.to_query_value(), "31/03/2025");
    }

    #[test]
    fn test_filter_date_serde_uses_query_form() {
        let d = FilterDate::parse("2025-01-02T10:00:00Z");
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-01-02\"");
        let back: FilterDate = serde_json::from_str("\"2025-01-02\"").unwrap();
        assert_eq!(back.date(), d.date());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any valid instant survives a query round-trip at day precision.
        #[test]
        fn filter_date_roundtrip_keeps_day(secs in 0i64..4_102_444_800) {
            let dt = DateTime::from_timestamp(secs, 0).unwrap();
            let d = FilterDate::Valid(dt);
            let back = FilterDate::parse(&d.to_query_value());
            prop_assert_eq!(back.date(), Some(dt.date_naive()));
        }

        /// Parsing never panics, whatever the input.
        #[test]
        fn filter_date_parse_total(raw in ".{0,40}") {
            let d = FilterDate::parse(&raw);
            if let FilterDate::Invalid(kept) = d {
                prop_assert_eq!(kept, raw);
            }
        }
    }
}
