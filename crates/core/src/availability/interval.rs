//! # Interval Model
//!
//! Every booking occupies a half-open span `[start, end)` of naive local
//! time. A span is built by joining a calendar date with a time of day; no
//! timezone conversion happens anywhere, so stored bookings and incoming
//! requests are compared on the same wall clock.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::{
    errors::{RentalError, RentalResult},
    format::{parse_date, parse_time},
    models::booking::BookingStatus,
};

/// Joins a date and a time of day into a single comparable instant.
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// A strictly ordered half-open span of naive local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeSpan {
    /// Creates a span, rejecting `start >= end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> RentalResult<Self> {
        if start >= end {
            return Err(RentalError::InvalidTimeSpan(format!(
                "Start {} must be before end {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    pub fn from_parts(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
    ) -> RentalResult<Self> {
        Self::new(combine(start_date, start_time), combine(end_date, end_time))
    }

    /// Builds a span from validated `YYYY-MM-DD` / `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// * `RentalError::InvalidTimeSpan` - A field does not parse, or the
    ///   resulting start is not before the end
    pub fn parse(
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> RentalResult<Self> {
        Self::from_parts(
            parse_date(start_date)?,
            parse_time(start_time)?,
            parse_date(end_date)?,
            parse_time(end_time)?,
        )
    }

    /// The whole calendar day `[date 00:00, date+1 00:00)`.
    pub fn day(date: NaiveDate) -> RentalResult<Self> {
        let start = combine(date, NaiveTime::MIN);
        let end = start.checked_add_signed(Duration::days(1)).ok_or_else(|| {
            RentalError::InvalidTimeSpan(format!("Date {} is out of range", date))
        })?;

        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Half-open overlap test. Spans that only touch at an endpoint do not
    /// overlap.
    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// The occupied span of one booking, as seen by availability checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingInterval {
    pub boat_id: Uuid,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
}

impl BookingInterval {
    /// Resolves the stored date/time pairs into a span.
    pub fn span(&self) -> RentalResult<TimeSpan> {
        TimeSpan::from_parts(self.start_date, self.start_time, self.end_date, self.end_time)
    }

    /// Whether this interval still holds the boat. Cancelled and refunded
    /// bookings don't.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
