use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ErrorResponse;

/// Raised for any malformed input and for any failed commit.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DataValidationError {
    pub message: String,
    #[source]
    source: Option<sea_orm::DbErr>,
}

impl DataValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

impl From<sea_orm::DbErr> for DataValidationError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    DataValidation(#[from] DataValidationError),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::DataValidation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not Found",
            AppError::BadRequest(_) | AppError::DataValidation(_) => "Bad Request",
            AppError::MethodNotAllowed(_) => "Method not Allowed",
            AppError::UnsupportedMediaType(_) => "Unsupported media type",
            AppError::PayloadTooLarge(_) => "Payload Too Large",
            AppError::OrmError(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::OrmError(err) => tracing::error!(error = %err, "database error"),
            AppError::DataValidation(err) => tracing::debug!(error = %err, "validation failed"),
            _ => {}
        }

        let body = ErrorResponse::new(status, self.label(), self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
