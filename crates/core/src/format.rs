//! Wire formats for calendar dates and times of day.
//!
//! Dates travel as `YYYY-MM-DD` and times as 24-hour `HH:MM`. Both are
//! naive: no offset is attached and none is ever inferred.

use chrono::{NaiveDate, NaiveTime};

use crate::errors::{RentalError, RentalResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> RentalResult<NaiveDate> {
    // chrono accepts unpadded fields, the wire format does not
    if value.len() != 10 {
        return Err(RentalError::InvalidTimeSpan(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            value
        )));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        RentalError::InvalidTimeSpan(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

/// Parses a 24-hour `HH:MM` time of day.
pub fn parse_time(value: &str) -> RentalResult<NaiveTime> {
    if value.len() != 5 {
        return Err(RentalError::InvalidTimeSpan(format!(
            "Invalid time '{}', expected HH:MM",
            value
        )));
    }

    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| {
        RentalError::InvalidTimeSpan(format!("Invalid time '{}', expected HH:MM", value))
    })
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Serde adapter for `NaiveTime` fields rendered as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}
