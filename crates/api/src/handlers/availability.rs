//! # Availability Handlers
//!
//! Read-only endpoints answering "which half-hour slots are still free on
//! this date" and "could this exact span be booked right now". Both run the
//! pure checks from `boatrent_core::availability` over the boat's active
//! bookings; neither reserves anything.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use boatrent_core::{
    availability::{is_available, BookingInterval, TimeSpan},
    format::{format_time, parse_date},
    models::booking::{AvailabilityResponse, Booking},
};

use crate::{handlers::boat::require_boat, middleware::error_handling::AppError, ApiState};

/// Query parameters for the free-slot endpoint
#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// Query parameters for the span check endpoint
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

/// Lists the free slot start times of a boat on one date
///
/// # Endpoint
///
/// ```text
/// GET /api/boats/:id/availability?date=2025-07-20
/// ```
///
/// Responds with a JSON array of `"HH:MM"` strings in grid order.
///
/// # Errors
///
/// * `RentalError::InvalidTimeSpan` - The date is malformed
/// * `RentalError::NotFound` - Unknown boat
#[axum::debug_handler]
pub async fn free_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let date = parse_date(&query.date)?;

    require_boat(&state, id).await?;

    let existing: Vec<BookingInterval> = state
        .bookings
        .get_active_bookings_on_date(id, date)
        .await?
        .iter()
        .map(Booking::interval)
        .collect();

    let free = state.slot_grid.free_slots(id, date, &existing)?;

    debug!("Boat {} has {} free slot(s) on {}", id, free.len(), date);

    Ok(Json(free.into_iter().map(format_time).collect()))
}

/// Reports whether a span is free for a boat
///
/// # Endpoint
///
/// ```text
/// GET /api/boats/:id/availability/check?start_date=2025-07-20&start_time=10:00&end_date=2025-07-20&end_time=12:00
/// ```
#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let requested = TimeSpan::parse(
        &query.start_date,
        &query.start_time,
        &query.end_date,
        &query.end_time,
    )?;

    require_boat(&state, id).await?;

    let existing: Vec<BookingInterval> = state
        .bookings
        .get_active_bookings_by_boat_id(id)
        .await?
        .iter()
        .map(Booking::interval)
        .collect();

    let available = is_available(id, &requested, &existing)?;

    Ok(Json(AvailabilityResponse { available }))
}
