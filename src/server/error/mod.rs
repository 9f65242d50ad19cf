//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the JSON error envelope. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Client-facing variants carry a detail message that is logged server-side only; the
/// response body is always the fixed envelope for the variant's status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A question field failed one of the creation rules.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error unless the endpoint collapses it with
    /// `or_unprocessable`.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed or incomplete client input, detected before touching the store.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Resource or page does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Semantically invalid operation, detected while executing it.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error("{0}")]
    UnprocessableEntity(String),
}

impl AppError {
    /// HTTP status code the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationErr(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Keeps client errors and turns every other failure into `UnprocessableEntity`.
    ///
    /// Used by endpoints whose failures after validation are all reported as 422
    /// (deletion, creation, search, per-category listing and quiz play).
    pub fn or_unprocessable(self) -> Self {
        match self {
            Self::ValidationErr(_)
            | Self::BadRequest(_)
            | Self::NotFound(_)
            | Self::UnprocessableEntity(_) => self,
            err => {
                tracing::error!("{}", err);
                Self::UnprocessableEntity(err.to_string())
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors are logged at debug level, everything else at error level. The body
/// never includes the error detail.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `ValidationErr`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `UnprocessableEntity`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}: {}", status, self);
        }

        (status, Json(ErrorDto::new(status.as_u16()))).into_response()
    }
}
