use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{
    availability::{BookingInterval, TimeSpan},
    errors::{RentalError, RentalResult},
    format::hhmm,
};

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Refunded,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Refunded => "refunded",
        }
    }

    /// Whether a booking in this state still occupies its boat. Cancelled
    /// and refunded bookings release their span.
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::Refunded)
    }

    /// Allowed lifecycle moves. No move leads from an inactive state back
    /// to an active one, since that would bypass the overlap check.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;

        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
                | (Completed, Refunded)
                | (Cancelled, Refunded)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            "refunded" => Ok(BookingStatus::Refunded),
            _ => Err(RentalError::Validation(format!("Invalid booking status: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub boat_id: Uuid,
    pub customer_name: String,
    pub start_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn interval(&self) -> BookingInterval {
        BookingInterval {
            boat_id: self.boat_id,
            start_date: self.start_date,
            start_time: self.start_time,
            end_date: self.end_date,
            end_time: self.end_time,
            status: self.status,
        }
    }
}

/// A validated booking ready to be persisted as `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub boat_id: Uuid,
    pub customer_name: String,
    pub span: TimeSpan,
}

impl NewBooking {
    pub fn start_date(&self) -> NaiveDate {
        self.span.start().date()
    }

    pub fn start_time(&self) -> NaiveTime {
        self.span.start().time()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.span.end().date()
    }

    pub fn end_time(&self) -> NaiveTime {
        self.span.end().time()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub boat_id: Uuid,
    pub customer_name: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl CreateBookingRequest {
    /// Checks the raw fields and resolves the requested span.
    ///
    /// # Errors
    ///
    /// * `RentalError::Validation` - The customer name is blank
    /// * `RentalError::InvalidTimeSpan` - A date or time is malformed, or the
    ///   span is empty or reversed
    pub fn validate(self) -> RentalResult<NewBooking> {
        let customer_name = self.customer_name.trim().to_string();
        if customer_name.is_empty() {
            return Err(RentalError::Validation(
                "customer_name must not be empty".to_string(),
            ));
        }

        let span = TimeSpan::parse(
            &self.start_date,
            &self.start_time,
            &self.end_date,
            &self.end_time,
        )?;

        Ok(NewBooking {
            boat_id: self.boat_id,
            customer_name,
            span,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}
