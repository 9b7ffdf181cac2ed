//! Nearby Error Types
//!
//! This module provides lookup-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Nearby-specific result type alias
pub type NearbyResult<T> = Result<T, NearbyError>;

/// Nearby-specific error variants
#[derive(Debug, Error)]
pub enum NearbyError {
    /// `location` query parameter was not supplied
    #[error("Missing required query parameter: location")]
    MissingLocation,

    /// Query string could not be decoded
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

impl NearbyError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            NearbyError::MissingLocation | NearbyError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NearbyError::MissingLocation | NearbyError::InvalidQuery(_) => ErrorKind::BadRequest,
        }
    }

    /// Client-facing hint attached to the problem body
    fn action(&self) -> &'static str {
        match self {
            NearbyError::MissingLocation => "Add ?location=<city> to the request",
            NearbyError::InvalidQuery(_) => "Check the query string encoding",
        }
    }

    fn log(&self) {
        tracing::debug!(error = %self, "Nearby lookup rejected");
    }
}

impl From<QueryRejection> for NearbyError {
    fn from(rejection: QueryRejection) -> Self {
        NearbyError::InvalidQuery(rejection.body_text())
    }
}

impl From<NearbyError> for AppError {
    fn from(err: NearbyError) -> Self {
        let kind = err.kind();
        let action = err.action();
        AppError::new(kind, err.to_string()).with_action(action)
    }
}

impl IntoResponse for NearbyError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
