//! Second-precision timestamp encoding for the settings file.
//!
//! Written as `yyyy-MM-ddTHH:mm:ss` with no zone and no fraction. An empty
//! string reads back as [`default_start_time`].

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Exact on-disk format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const LENIENT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The instant a fresh document counts from: 2025-03-17 00:27:00.
pub fn default_start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 17)
        .and_then(|date| date.and_hms_opt(0, 27, 0))
        .unwrap_or_default()
}

/// Drop everything below whole seconds.
pub fn truncate_to_seconds(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}

/// Format a timestamp the way the settings file stores it.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp; fractional seconds are accepted and truncated.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(default_start_time());
    }
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, LENIENT_FORMAT))
        .ok()
        .map(truncate_to_seconds)
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(*value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}
