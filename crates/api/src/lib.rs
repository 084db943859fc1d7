//! # BoatRent API
//!
//! The API crate provides the web server for the BoatRent marketplace. It
//! exposes boat records, booking placement with overlap checks, booking
//! status changes and free-slot queries.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests, run availability checks, call repositories
//! - **Middleware**: Error mapping shared by all handlers
//! - **Config**: Environment and application configuration
//!
//! Storage is reached only through the repository traits in
//! `boatrent_core::ports`; the server wires in the PostgreSQL store.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use boatrent_core::{
    availability::SlotGrid,
    ports::{BoatRepository, BookingRepository},
};
use boatrent_db::{DbPool, PgStore};
use eyre::Result;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use boatrent_api::ApiState;
/// # use boatrent_core::availability::SlotGrid;
/// # fn build(store: boatrent_db::PgStore) -> Arc<ApiState> {
/// Arc::new(ApiState {
///     boats: Arc::new(store.clone()),
///     bookings: Arc::new(store),
///     slot_grid: SlotGrid::default(),
/// })
/// # }
/// ```
pub struct ApiState {
    /// Boat records
    pub boats: Arc<dyn BoatRepository>,
    /// Bookings, the source of every availability decision
    pub bookings: Arc<dyn BookingRepository>,
    /// Business hours used to enumerate free slots
    pub slot_grid: SlotGrid,
}

/// Builds the application router with all routes attached to `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Boat records
        .merge(routes::boat::routes())
        // Booking placement and lifecycle
        .merge(routes::booking::routes())
        // Free slots and span checks
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// This function initializes logging, wires the PostgreSQL store into the
/// shared state, configures routes and middleware, and serves HTTP until the
/// listener fails.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool for database operations
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let store = PgStore::new(db_pool);
    let state = Arc::new(ApiState {
        boats: Arc::new(store.clone()),
        bookings: Arc::new(store),
        slot_grid: config.slot_grid,
    });

    info!(
        "Availability grid: {} to {} every {} minutes",
        config.slot_grid.open(),
        config.slot_grid.close(),
        config.slot_grid.step().num_minutes()
    );

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request logging and timeout
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
