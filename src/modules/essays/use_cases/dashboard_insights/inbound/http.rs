use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::modules::essays::core::analytics::window::Period;
use crate::modules::essays::use_cases::dashboard_insights::projection::{
    DashboardView, build_dashboard,
};
use crate::modules::essays::use_cases::list_essays::queries::essays_newest_first;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::DateOrder;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DashboardParams {
    pub period: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardView>, ApiError> {
    let period = match params.period.as_deref() {
        None => Period::default(),
        Some(tag) => tag.parse::<Period>().map_err(|reason| {
            tracing::warn!(%reason, "dashboard period rejected");
            ApiError::Validation(format!("Período inválido: {tag}"))
        })?,
    };

    let history = essays_newest_first(state.essays.as_ref())
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(build_dashboard(
        &history,
        DateOrder::NewestFirst,
        period,
        state.today(),
    )))
}

#[cfg(test)]
mod dashboard_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::http::{get as get_request, json_of};
    use crate::tests::fixtures::state::{make_offline_state, make_seeded_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/analytics/dashboard", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_default_to_the_whole_history() {
        let response = app(make_seeded_state())
            .oneshot(get_request("/api/analytics/dashboard"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["period"], "all");
        assert_eq!(json["essayCount"], 8);
        assert_eq!(json["averageScore"], 793);
        assert_eq!(json["latestScore"], 880);
        assert_eq!(json["target"], 900);
        assert_eq!(json["trend"]["trend"], "up");
        assert_eq!(json["goal"]["distance"], 107);
        assert_eq!(json["competencies"].as_array().unwrap().len(), 5);
    }

    #[rstest]
    #[case("7days", 1)]
    #[case("15days", 2)]
    #[case("1month", 4)]
    #[case("3months", 8)]
    #[tokio::test]
    async fn it_should_window_the_essay_count(#[case] period: &str, #[case] count: u64) {
        let response = app(make_seeded_state())
            .oneshot(get_request(&format!("/api/analytics/dashboard?period={period}")))
            .await
            .unwrap();
        assert_eq!(json_of(response).await["essayCount"], count);
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unknown_period() {
        let response = app(make_seeded_state())
            .oneshot(get_request("/api/analytics/dashboard?period=2weeks"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let response = app(make_offline_state())
            .oneshot(get_request("/api/analytics/dashboard"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
