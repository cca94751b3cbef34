//! Time related utils.
//!
//! Every signing operation reads the clock once and derives both the
//! `x-amz-date` timestamp and the credential scope date from that one value.

use crate::Error;
use chrono::Timelike;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Drop the sub-second part of a datetime.
///
/// SigV4 timestamps carry second precision only.
pub fn truncate_to_seconds(t: DateTime) -> DateTime {
    // `with_nanosecond(0)` only fails for out of range values, 0 is always valid.
    t.with_nanosecond(0).unwrap_or(t)
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601 basic format: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse time from RFC3339.
///
/// All these formats are the same time:
///
/// - `2022-03-13T07:20:04Z`
/// - `2022-03-13T07:20:04+00:00`
/// - `2022-03-13T07:20:04.000000+00:00`
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&Utc))
        .map_err(|e| Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e))
}
