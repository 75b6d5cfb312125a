use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::library::core::material::{Material, MaterialKind};
use crate::modules::library::use_cases::publish_material::decide::PublishMaterial;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

pub const MATERIAL_NOT_FOUND: &str = "Material não encontrado";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishMaterialBody {
    pub title: String,
    pub description: Option<String>,
    pub kind: MaterialKind,
    pub file_ref: String,
    pub upload_date: Option<NaiveDate>,
}

/// Newest uploads first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Material>>, ApiError> {
    let mut materials = state
        .materials
        .get_all()
        .await
        .map_err(ApplicationError::from)?;
    materials.sort_by(|a, b| b.upload_date.cmp(&a.upload_date).then_with(|| a.id.cmp(&b.id)));
    Ok(Json(materials))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Material>, ApiError> {
    state
        .materials
        .get_by_id(&id)
        .await
        .map_err(ApplicationError::from)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(MATERIAL_NOT_FOUND))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<PublishMaterialBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::invalid_data())?;
    let command = PublishMaterial {
        material_id: Uuid::now_v7().to_string(),
        title: body.title,
        description: body.description,
        kind: body.kind,
        file_ref: body.file_ref,
        upload_date: body.upload_date,
        today: state.today(),
    };
    let material = state.publish_material.handle(command).await?;
    Ok((StatusCode::CREATED, Json(material)))
}
