//! Error types for the RentDesk core
//!
//! Only storage and serialization failures are errors. Business-rule
//! rejections (booking conflicts, deletion guards) are normal outcomes and
//! surface as a boolean result plus a notification, never as an `AppError`.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
