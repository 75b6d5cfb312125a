use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;

use crate::modules::auth::core::session::Credentials;
use crate::shared::infrastructure::http_error::{ApiError, UNAUTHENTICATED};
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<SessionStatus>, ApiError> {
    let Json(credentials) = body.map_err(|_| ApiError::invalid_data())?;
    if !credentials.is_present() {
        tracing::warn!("login without credentials");
        return Err(ApiError::Validation("Email e senha são obrigatórios".into()));
    }
    state.session.open();
    tracing::info!("session opened");
    Ok(Json(SessionStatus {
        authenticated: true,
        email: Some(credentials.email.trim().to_string()),
    }))
}

pub async fn logout(State(state): State<AppState>) -> Json<SessionStatus> {
    state.session.close();
    tracing::info!("session closed");
    Json(SessionStatus {
        authenticated: false,
        email: None,
    })
}

pub async fn check(State(state): State<AppState>) -> Result<Json<SessionStatus>, ApiError> {
    if !state.session.is_open() {
        return Err(ApiError::Unauthorized(UNAUTHENTICATED.into()));
    }
    Ok(Json(SessionStatus {
        authenticated: true,
        email: None,
    }))
}

#[cfg(test)]
mod session_http_inbound_tests {
    use axum::{
        Router,
        http::StatusCode,
        routing::{get, post},
    };
    use rstest::rstest;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::http::{get as get_request, json_of, post_empty, post_json};
    use crate::tests::fixtures::state::make_test_state;

    use super::{check, login, logout};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/logout", post(logout))
            .route("/api/auth/check", get(check))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_open_the_session_on_login() {
        let state = make_test_state();
        let response = app(state.clone())
            .oneshot(post_json(
                "/api/auth/login",
                json!({ "email": "aluna@exemplo.com", "password": "segredo" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_of(response).await,
            json!({ "authenticated": true, "email": "aluna@exemplo.com" })
        );
        assert!(state.session.is_open());
    }

    #[rstest]
    #[case(json!({ "email": "", "password": "segredo" }))]
    #[case(json!({ "email": "aluna@exemplo.com", "password": "" }))]
    #[case(json!({ "email": "aluna@exemplo.com" }))]
    #[tokio::test]
    async fn it_should_return_400_for_missing_credentials(#[case] body: serde_json::Value) {
        let state = make_test_state();
        let response = app(state.clone())
            .oneshot(post_json("/api/auth/login", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!state.session.is_open());
    }

    #[tokio::test]
    async fn it_should_report_the_session_until_logout() {
        let state = make_test_state();
        let response = app(state.clone())
            .oneshot(get_request("/api/auth/check"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        state.session.open();
        let response = app(state.clone())
            .oneshot(get_request("/api/auth/check"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(state.clone())
            .oneshot(post_empty("/api/auth/logout"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!state.session.is_open());
    }
}
