// Error type shared by every HTTP inbound adapter.
//
// Responsibilities
// - Map application failures to a status code and a flat, localized `{ "message" }` body.
// - Log unexpected failures; never leak their cause to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::shared::core::errors::ApplicationError;

pub const INVALID_DATA: &str = "Dados inválidos";
pub const INTERNAL_ERROR: &str = "Erro interno do servidor";
pub const UNAUTHENTICATED: &str = "Não autenticado";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unexpected(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn invalid_data() -> Self {
        ApiError::Validation(INVALID_DATA.to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Rejected(reason) => {
                ApiError::Validation(format!("{INVALID_DATA}: {reason}"))
            }
            ApplicationError::Conflict(reason) => ApiError::Conflict(reason),
            ApplicationError::Store(cause) => {
                tracing::error!(error = %cause, "record store failure");
                ApiError::Unexpected(INTERNAL_ERROR.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
