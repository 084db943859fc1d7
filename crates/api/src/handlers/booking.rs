//! # Booking Handlers
//!
//! Placing a booking runs in three steps:
//!
//! 1. The raw request is validated and its dates/times resolved into a span
//! 2. The boat's active bookings are fetched and checked for overlap
//! 3. The booking is stored as `pending`
//!
//! Step 3 can still fail with a conflict when another request for the same
//! boat commits between steps 2 and 3; the store's exclusion constraint
//! reports that case the same way as a failed check.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use boatrent_core::{
    availability::{conflicts, BookingInterval},
    errors::RentalError,
    format::format_time,
    models::booking::{Booking, CreateBookingRequest, UpdateBookingStatusRequest},
};

use crate::{handlers::boat::require_boat, middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let new_booking = payload.validate()?;
    let boat_id = new_booking.boat_id;

    require_boat(&state, boat_id).await?;

    let existing: Vec<BookingInterval> = state
        .bookings
        .get_active_bookings_by_boat_id(boat_id)
        .await?
        .iter()
        .map(Booking::interval)
        .collect();

    let clashing = conflicts(boat_id, &new_booking.span, &existing)?;
    if let Some(first) = clashing.first() {
        warn!(
            "Rejected booking for boat {}: {} overlapping booking(s)",
            boat_id,
            clashing.len()
        );
        return Err(AppError(RentalError::Conflict(format!(
            "Boat {} is already booked from {} {} to {} {}",
            boat_id,
            first.start_date,
            format_time(first.start_time),
            first.end_date,
            format_time(first.end_time)
        ))));
    }

    let booking = state.bookings.create_booking(new_booking).await?;

    info!(
        "Booked boat {} for {} {} - {} {} (booking {})",
        booking.boat_id,
        booking.start_date,
        format_time(booking.start_time),
        booking.end_date,
        format_time(booking.end_time),
        booking.id
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .bookings
        .get_booking_by_id(id)
        .await?
        .ok_or_else(|| RentalError::NotFound(format!("Booking with ID {} not found", id)))?;

    Ok(Json(booking))
}

/// Moves a booking along its lifecycle. Illegal moves, such as reviving a
/// cancelled booking, are rejected with a conflict. So is a move whose
/// starting status was changed by a concurrent request.
#[axum::debug_handler]
pub async fn update_booking_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<Json<Booking>, AppError> {
    let current = state
        .bookings
        .get_booking_by_id(id)
        .await?
        .ok_or_else(|| RentalError::NotFound(format!("Booking with ID {} not found", id)))?;

    if !current.status.can_transition_to(payload.status) {
        return Err(AppError(RentalError::Conflict(format!(
            "Booking {} cannot move from {} to {}",
            id, current.status, payload.status
        ))));
    }

    let updated = state
        .bookings
        .update_booking_status(id, current.status, payload.status)
        .await?;

    info!("Booking {} moved from {} to {}", id, current.status, updated.status);

    Ok(Json(updated))
}
