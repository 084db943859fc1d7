//! # Slot Enumerator
//!
//! Lists the free start times of a fixed slot grid on one calendar day. The
//! default grid opens at 08:00, closes at 20:00 and steps every 30 minutes,
//! giving 24 slots from 08:00 through 19:30.
//!
//! A slot is booked when its instant lies inside `[start, end)` of an active
//! booking of the same boat. Bookings are matched against the whole queried
//! day, so a multi-day rental that neither starts nor ends on the date still
//! blocks it.

use chrono::{Duration, NaiveDate, NaiveTime};
use uuid::Uuid;

use super::interval::{combine, BookingInterval, TimeSpan};
use crate::errors::{RentalError, RentalResult};

pub const DEFAULT_STEP_MINUTES: u32 = 30;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Business hours split into equally spaced slot start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    open: NaiveTime,
    close: NaiveTime,
    step: Duration,
}

impl SlotGrid {
    /// Creates a grid covering `[open, close)`.
    ///
    /// # Errors
    ///
    /// * `RentalError::Validation` - `open` is not before `close`, or the step
    ///   is zero or longer than a day
    pub fn new(open: NaiveTime, close: NaiveTime, step_minutes: u32) -> RentalResult<Self> {
        if open >= close {
            return Err(RentalError::Validation(format!(
                "Business hours must open before they close (open {}, close {})",
                open, close
            )));
        }

        if step_minutes == 0 || step_minutes > MINUTES_PER_DAY {
            return Err(RentalError::Validation(format!(
                "Slot step must be between 1 and {} minutes, got {}",
                MINUTES_PER_DAY, step_minutes
            )));
        }

        Ok(Self {
            open,
            close,
            step: Duration::minutes(i64::from(step_minutes)),
        })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Every slot start time of the grid, in ascending order.
    pub fn slots(&self) -> Vec<NaiveTime> {
        let mut slots = Vec::new();
        let mut current = self.open;

        while current < self.close {
            slots.push(current);

            let (next, wrapped) = current.overflowing_add_signed(self.step);
            if wrapped != 0 {
                break;
            }
            current = next;
        }

        slots
    }

    /// The grid slots of `date` not covered by any active booking of
    /// `boat_id`, in grid order.
    ///
    /// # Errors
    ///
    /// * `RentalError::InvalidTimeSpan` - A considered booking has
    ///   `start >= end`, or `date` is at the edge of the calendar
    pub fn free_slots(
        &self,
        boat_id: Uuid,
        date: NaiveDate,
        existing: &[BookingInterval],
    ) -> RentalResult<Vec<NaiveTime>> {
        let day = TimeSpan::day(date)?;

        let mut blocking = Vec::new();
        for interval in existing
            .iter()
            .filter(|interval| interval.boat_id == boat_id && interval.is_active())
        {
            let span = interval.span()?;
            if span.overlaps(&day) {
                blocking.push(span);
            }
        }

        let free = self
            .slots()
            .into_iter()
            .filter(|slot| {
                let instant = combine(date, *slot);
                !blocking.iter().any(|span| span.contains(instant))
            })
            .collect();

        Ok(free)
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            open: NaiveTime::MIN + Duration::hours(8),
            close: NaiveTime::MIN + Duration::hours(20),
            step: Duration::minutes(i64::from(DEFAULT_STEP_MINUTES)),
        }
    }
}
