//! # Overlap Checker
//!
//! Decides whether a requested rental span collides with the existing
//! bookings of a boat. A collision is any of:
//!
//! 1. the requested start falls inside an existing booking
//! 2. the requested end falls inside an existing booking
//! 3. the requested span swallows an existing booking whole
//!
//! All three reduce to the half-open test `s1 < e2 && s2 < e1`, which is what
//! [`TimeSpan::overlaps`] implements. A booking that ends at exactly the
//! instant another starts does not collide with it.

use uuid::Uuid;

use super::interval::{BookingInterval, TimeSpan};
use crate::errors::RentalResult;

/// Returns the active intervals of `boat_id` that overlap `requested`, in
/// input order.
///
/// Intervals belonging to other boats and inactive intervals are skipped
/// before their spans are resolved.
///
/// # Errors
///
/// * `RentalError::InvalidTimeSpan` - A considered interval has `start >= end`
pub fn conflicts<'a>(
    boat_id: Uuid,
    requested: &TimeSpan,
    existing: &'a [BookingInterval],
) -> RentalResult<Vec<&'a BookingInterval>> {
    let mut clashing = Vec::new();

    for interval in existing
        .iter()
        .filter(|interval| interval.boat_id == boat_id && interval.is_active())
    {
        if interval.span()?.overlaps(requested) {
            clashing.push(interval);
        }
    }

    Ok(clashing)
}

/// `true` iff no active interval of `boat_id` overlaps `requested`.
pub fn is_available(
    boat_id: Uuid,
    requested: &TimeSpan,
    existing: &[BookingInterval],
) -> RentalResult<bool> {
    Ok(conflicts(boat_id, requested, existing)?.is_empty())
}
