use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::appointments::core::appointment::TimeSlot;
use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentBody {
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<BookAppointmentBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed appointment body");
        ApiError::invalid_data()
    })?;

    let command = BookAppointment {
        appointment_id: Uuid::now_v7().to_string(),
        date: body.date,
        time_slot: body.time_slot,
        today: state.today(),
    };

    let appointment = state.book_appointment.handle(command).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}
