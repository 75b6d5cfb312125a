// Middleware guarding every route that needs an open session.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::shared::infrastructure::http_error::{ApiError, UNAUTHENTICATED};
use crate::shell::state::AppState;

pub async fn require_session(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.session.is_open() {
        tracing::debug!(path = %request.uri().path(), "request without session");
        return ApiError::Unauthorized(UNAUTHENTICATED.into()).into_response();
    }
    next.run(request).await
}
