//! Error types for the records service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed payload, or a search without any usable filter.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {record_type}/{id}")]
    UnknownIdentifier { record_type: String, id: String },

    #[error("Storage failure: {0}")]
    StorageFailure(#[from] sqlx::Error),

    #[error("Schema registration conflict: {0}")]
    SchemaRegistrationConflict(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::UnknownIdentifier { .. } => StatusCode::NOT_FOUND,
            Error::StorageFailure(_) | Error::SchemaRegistrationConflict(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Error::InvalidRequest(_) => "invalid-request",
            Error::UnknownIdentifier { .. } => "not-found",
            _ => "exception",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // Query text and bound values stay in the server log.
            tracing::error!(error = %self, "Internal error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
