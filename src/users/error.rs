use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connectivity probe failed: {0}")]
    Connectivity(#[source] sqlx::Error),
    #[error("failed to query users: {0}")]
    Query(#[source] sqlx::Error),
    #[error("failed to decode user row: {0}")]
    Decode(#[source] sqlx::Error),
}

impl StoreError {
    /// Splits a failed read into query and row-decode failures.
    pub fn from_read(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. } => Self::Decode(e),
            other => Self::Query(other),
        }
    }
}

/// Logs the store failure and hides its details from the client.
pub fn internal(e: StoreError) -> (StatusCode, String) {
    error!(error = %e, "store error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".into(),
    )
}
