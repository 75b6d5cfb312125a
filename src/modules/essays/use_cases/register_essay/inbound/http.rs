use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::essays::use_cases::register_essay::command::RegisterEssay;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEssayBody {
    pub theme: String,
    pub date: NaiveDate,
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
    pub c4: u32,
    pub c5: u32,
    pub total_score: Option<u32>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterEssayBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed essay body");
        ApiError::invalid_data()
    })?;

    let command = RegisterEssay {
        essay_id: Uuid::now_v7().to_string(),
        theme: body.theme,
        date: body.date,
        c1: body.c1,
        c2: body.c2,
        c3: body.c3,
        c4: body.c4,
        c5: body.c5,
        total_score: body.total_score,
    };

    let essay = state.register_essay.handle(command).await?;
    Ok((StatusCode::CREATED, Json(essay)))
}
