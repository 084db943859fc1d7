use axum::{extract::State, routing::get, Json, Router};
use boatrent_core::format::format_time;
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
    business_open: String,
    business_close: String,
    slot_minutes: i64,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn version(State(state): State<Arc<ApiState>>) -> Json<VersionResponse> {
    let grid = &state.slot_grid;

    Json(VersionResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        business_open: format_time(grid.open()),
        business_close: format_time(grid.close()),
        slot_minutes: grid.step().num_minutes(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
