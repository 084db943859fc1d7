//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the BoatRent API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BUSINESS_OPEN`: First bookable slot, `HH:MM` (default: "08:00")
//! - `BUSINESS_CLOSE`: End of business hours, `HH:MM` (default: "20:00")
//! - `SLOT_MINUTES`: Spacing of the availability grid (default: 30)

use boatrent_core::{availability::SlotGrid, format::parse_time};
use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the BoatRent API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use boatrent_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Business hours and slot spacing used by the availability endpoints
    pub slot_grid: SlotGrid,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The business hours or slot spacing are malformed or inconsistent
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Availability grid
        let slot_grid = slot_grid_from_values(
            &env::var("BUSINESS_OPEN").unwrap_or_else(|_| "08:00".to_string()),
            &env::var("BUSINESS_CLOSE").unwrap_or_else(|_| "20:00".to_string()),
            &env::var("SLOT_MINUTES").unwrap_or_else(|_| "30".to_string()),
        )?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            slot_grid,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Builds the availability grid from raw configuration strings.
pub fn slot_grid_from_values(open: &str, close: &str, step_minutes: &str) -> Result<SlotGrid> {
    let open = parse_time(open).wrap_err("Invalid BUSINESS_OPEN value")?;
    let close = parse_time(close).wrap_err("Invalid BUSINESS_CLOSE value")?;
    let step_minutes = step_minutes
        .parse()
        .wrap_err("Invalid SLOT_MINUTES value")?;

    SlotGrid::new(open, close, step_minutes).wrap_err("Invalid business hours")
}
