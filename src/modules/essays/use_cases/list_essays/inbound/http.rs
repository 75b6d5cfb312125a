use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::essays::core::essay::EssayRecord;
use crate::modules::essays::use_cases::list_essays::queries::essays_newest_first;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

pub const ESSAY_NOT_FOUND: &str = "Redação não encontrada";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EssayRecord>>, ApiError> {
    let essays = essays_newest_first(state.essays.as_ref())
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(essays))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EssayRecord>, ApiError> {
    state
        .essays
        .get_by_id(&id)
        .await
        .map_err(ApplicationError::from)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ESSAY_NOT_FOUND))
}

#[cfg(test)]
mod list_essays_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::http::{get as get_request, json_of};
    use crate::tests::fixtures::state::{make_offline_state, make_seeded_state, make_test_state};

    use super::{get_by_id, list};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/essays", get(list))
            .route("/api/essays/{id}", get(get_by_id))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_list_when_no_essays_exist() {
        let response = app(make_test_state())
            .oneshot(get_request("/api/essays"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_of(response).await, json!([]));
    }

    #[tokio::test]
    async fn it_should_list_the_seeded_essays_newest_first() {
        let response = app(make_seeded_state())
            .oneshot(get_request("/api/essays"))
            .await
            .unwrap();
        let json = json_of(response).await;
        let dates: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates.len(), 8);
        assert_eq!(dates.first(), Some(&"2025-10-15"));
        assert_eq!(dates.last(), Some(&"2025-08-27"));
    }

    #[tokio::test]
    async fn it_should_return_the_essay_by_id() {
        let state = make_seeded_state();
        let essay = state.essays.get_all().await.unwrap().remove(0);
        let response = app(state)
            .oneshot(get_request(&format!("/api/essays/{}", essay.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_of(response).await["theme"], essay.theme);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_id() {
        let response = app(make_seeded_state())
            .oneshot(get_request("/api/essays/nope"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_of(response).await,
            json!({ "message": "Redação não encontrada" })
        );
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let response = app(make_offline_state())
            .oneshot(get_request("/api/essays"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
