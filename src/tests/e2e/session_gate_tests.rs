use crate::shell::http::router;
use crate::tests::fixtures::http::{get, post_empty, post_json};
use crate::tests::fixtures::state::make_seeded_state;
use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn protected_routes_follow_the_session() {
    let app = router(make_seeded_state());

    let response = app.clone().oneshot(get("/api/essays")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": "aluno@exemplo.com", "password": "1234" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/api/essays")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_empty("/api/auth/logout"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/essays")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case("/api/analytics/dashboard")]
#[case("/api/appointments")]
#[case("/api/materials")]
#[case("/api/weekly-theme")]
#[case("/gql")]
#[tokio::test]
async fn every_protected_route_requires_a_session(#[case] uri: &str) {
    let response = router(make_seeded_state()).oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_routes_stay_public() {
    let response = router(make_seeded_state())
        .oneshot(get("/api/auth/check"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = router(make_seeded_state())
        .oneshot(post_empty("/api/auth/logout"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
