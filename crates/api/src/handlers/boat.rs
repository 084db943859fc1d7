use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use boatrent_core::{
    errors::RentalError,
    models::{
        boat::{Boat, CreateBoatRequest},
        booking::Booking,
    },
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Loads a boat or fails with `RentalError::NotFound`.
pub(crate) async fn require_boat(state: &ApiState, id: Uuid) -> Result<Boat, AppError> {
    state
        .boats
        .get_boat_by_id(id)
        .await?
        .ok_or_else(|| AppError(RentalError::NotFound(format!("Boat with ID {} not found", id))))
}

#[axum::debug_handler]
pub async fn create_boat(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBoatRequest>,
) -> Result<(StatusCode, Json<Boat>), AppError> {
    let new_boat = payload.validate()?;
    let boat = state.boats.create_boat(new_boat).await?;

    info!("Registered boat {} ({})", boat.id, boat.name);

    Ok((StatusCode::CREATED, Json(boat)))
}

#[axum::debug_handler]
pub async fn list_boats(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<Boat>>, AppError> {
    let boats = state.boats.list_boats().await?;
    Ok(Json(boats))
}

#[axum::debug_handler]
pub async fn get_boat(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Boat>, AppError> {
    let boat = require_boat(&state, id).await?;
    Ok(Json(boat))
}

/// Every booking of a boat, cancelled ones included, ordered by start.
#[axum::debug_handler]
pub async fn list_boat_bookings(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    require_boat(&state, id).await?;

    let bookings = state.bookings.get_bookings_by_boat_id(id).await?;
    Ok(Json(bookings))
}
