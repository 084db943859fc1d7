use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/boats/:id/availability",
            get(handlers::availability::free_slots),
        )
        .route(
            "/api/boats/:id/availability/check",
            get(handlers::availability::check_availability),
        )
}
