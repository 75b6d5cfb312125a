use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::library::core::weekly_theme::{WeeklyTheme, current_theme};
use crate::modules::library::use_cases::weekly_themes::decide::CreateWeeklyTheme;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

pub const NO_ACTIVE_THEME: &str = "Nenhum tema ativo";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeeklyThemeBody {
    pub theme: String,
    pub description: Option<String>,
    pub week_start: NaiveDate,
    pub active: Option<bool>,
}

pub async fn current(State(state): State<AppState>) -> Result<Json<WeeklyTheme>, ApiError> {
    let themes = state
        .weekly_themes
        .get_all()
        .await
        .map_err(ApplicationError::from)?;
    current_theme(&themes)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(NO_ACTIVE_THEME))
}

/// Latest week first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<WeeklyTheme>>, ApiError> {
    let mut themes = state
        .weekly_themes
        .get_all()
        .await
        .map_err(ApplicationError::from)?;
    themes.sort_by(|a, b| b.week_start.cmp(&a.week_start).then_with(|| a.id.cmp(&b.id)));
    Ok(Json(themes))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateWeeklyThemeBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::invalid_data())?;
    let command = CreateWeeklyTheme {
        theme_id: Uuid::now_v7().to_string(),
        theme: body.theme,
        description: body.description,
        week_start: body.week_start,
        active: body.active.unwrap_or(true),
    };
    let theme = state.create_weekly_theme.handle(command).await?;
    Ok((StatusCode::CREATED, Json(theme)))
}
