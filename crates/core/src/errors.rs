use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A start/end pair could not be parsed or is not strictly ordered.
    #[error("Invalid time span: {0}")]
    InvalidTimeSpan(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type RentalResult<T> = Result<T, RentalError>;
