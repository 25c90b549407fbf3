//! # HTTP API Errors
//!
//! Maps catalogue failures and body-decoding failures to responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalogue::{CatalogueError, MovieField};

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body is not a decodable movie request
    #[error("Incorrect data in request")]
    InvalidBody,

    /// Typed failure from the catalogue
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Catalogue(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
        }
    }

    /// Short machine-readable kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBody => "invalid_body",
            ApiError::Catalogue(err) => err.kind(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<MovieField>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let field = match &err {
            ApiError::Catalogue(CatalogueError::Validation { field }) => Some(*field),
            _ => None,
        };

        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
