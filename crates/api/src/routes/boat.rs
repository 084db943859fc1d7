use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/boats",
            get(handlers::boat::list_boats).post(handlers::boat::create_boat),
        )
        .route("/api/boats/:id", get(handlers::boat::get_boat))
        .route(
            "/api/boats/:id/bookings",
            get(handlers::boat::list_boat_bookings),
        )
}
