//! GA date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a GA date cell, accepting the formats seen in product page exports.
///
/// Returns `None` for blank or unrecognized values.
pub fn parse_ga_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    try_parse_date(value)
        .or_else(|| try_parse_datetime(value).map(|dt| dt.date()))
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",  // US: 01/15/2026
        "%d-%b-%Y",  // 15-Jan-2026
        "%b %d, %Y", // Jan 15, 2026
        "%d %b %Y",  // 15 Jan 2026
    ];
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
