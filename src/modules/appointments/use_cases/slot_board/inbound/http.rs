use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::appointments::use_cases::slot_board::projection::{SlotBoard, slot_board};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AvailabilityParams {
    pub date: NaiveDate,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<AvailabilityParams>, QueryRejection>,
) -> Result<Json<SlotBoard>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!(error = %rejection, "availability query rejected");
        ApiError::invalid_data()
    })?;
    let appointments = state
        .appointments
        .get_all()
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(slot_board(&appointments, params.date, state.today())))
}
