use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::core::availability::upcoming as upcoming_from;
use crate::modules::appointments::use_cases::list_appointments::queries::appointments_by_date;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

pub const APPOINTMENT_NOT_FOUND: &str = "Agendamento não encontrado";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    let appointments = appointments_by_date(state.appointments.as_ref())
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(appointments))
}

pub async fn upcoming(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    let appointments = state
        .appointments
        .get_all()
        .await
        .map_err(ApplicationError::from)?;
    Ok(Json(upcoming_from(&appointments, state.today())))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    state
        .appointments
        .get_by_id(&id)
        .await
        .map_err(ApplicationError::from)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(APPOINTMENT_NOT_FOUND))
}
