use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;

/// Error taxonomy of the voting backend. All client-caused failures
/// map to 400 with a `{"error": msg}` body; anything unexpected maps
/// to 500 without leaking internal detail.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Auth(String),
    Conflict(String),
    NotFound(String),
    AnyError(anyhow::Error),
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self::AnyError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => {
                tracing::debug!("Validation error: {}", msg);
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            Self::Auth(msg) => {
                tracing::debug!("Auth error: {}", msg);
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            Self::Conflict(msg) => {
                tracing::debug!("Conflict: {}", msg);
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            Self::NotFound(msg) => {
                tracing::debug!("Not Found: {}", msg);
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            Self::AnyError(err) => {
                tracing::error!("Something went wrong: {:?}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        }
    }
}

fn error_response(status: StatusCode, msg: String) -> Response {
    let response = ErrorResponse { error: msg };
    (status, Json(response)).into_response()
}
