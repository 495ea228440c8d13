//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },
    #[error("{var} must be a positive byte count: {value}")]
    InvalidLimit { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not a number: {0:?}")]
    CorruptValue(String),
    #[error("result out of range for {0}")]
    OutOfRange(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Io(_) | AppError::CorruptValue(_) | AppError::OutOfRange(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors carry no body at all.
        let code = match &self {
            AppError::BadRequest(_) => return StatusCode::BAD_REQUEST.into_response(),
            AppError::Io(_) => "store_error",
            AppError::CorruptValue(_) => "corrupt_value",
            AppError::OutOfRange(_) => "out_of_range",
        };
        tracing::error!(error = %self, "request failed");
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
