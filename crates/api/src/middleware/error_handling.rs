//! # Error Handling Middleware
//!
//! This module maps domain errors to HTTP status codes and JSON error
//! responses, so every handler reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use boatrent_core::errors::RentalError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `RentalError` instances and implements `IntoResponse`
/// to convert them into HTTP responses with a `{ "error": message }` body.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use boatrent_api::middleware::error_handling::AppError;
/// use boatrent_core::errors::RentalError;
/// use uuid::Uuid;
///
/// async fn handler(id: Uuid) -> Result<Json<Uuid>, AppError> {
///     Err(AppError(RentalError::NotFound(format!("Boat with ID {} not found", id))))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub RentalError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RentalError::NotFound(_) => StatusCode::NOT_FOUND,
            RentalError::Validation(_) => StatusCode::BAD_REQUEST,
            RentalError::InvalidTimeSpan(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RentalError::Conflict(_) => StatusCode::CONFLICT,
            RentalError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RentalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));

        (status, body).into_response()
    }
}

/// Allows `?` on `RentalResult` inside handlers returning `Result<T, AppError>`.
impl From<RentalError> for AppError {
    fn from(err: RentalError) -> Self {
        AppError(err)
    }
}

/// Wraps bare eyre reports as database failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RentalError::Database(err))
    }
}
