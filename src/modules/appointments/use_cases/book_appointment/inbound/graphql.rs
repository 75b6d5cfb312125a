use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::appointments::core::appointment::{Appointment, TimeSlot};
use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;
use crate::shared::infrastructure::http_error::{ApiError, INVALID_DATA};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAppointment {
    pub id: ID,
    pub date: String,
    pub time_slot: String,
    pub status: String,
}

impl From<Appointment> for GqlAppointment {
    fn from(a: Appointment) -> Self {
        Self {
            id: ID(a.id),
            date: a.date.to_string(),
            time_slot: a.time_slot.to_string(),
            status: a.status.as_str().to_string(),
        }
    }
}

#[derive(Default)]
pub struct BookAppointmentMutation;

#[Object]
impl BookAppointmentMutation {
    async fn book_appointment(
        &self,
        context: &Context<'_>,
        date: String,
        time_slot: String,
    ) -> GqlResult<GqlAppointment> {
        let state = context.data_unchecked::<AppState>();
        let date = date
            .parse::<NaiveDate>()
            .map_err(|_| async_graphql::Error::new(INVALID_DATA))?;
        let time_slot = time_slot.parse::<TimeSlot>()?;

        let command = BookAppointment {
            appointment_id: Uuid::now_v7().to_string(),
            date,
            time_slot,
            today: state.today(),
        };

        let appointment = state
            .book_appointment
            .handle(command)
            .await
            .map_err(ApiError::from)?;
        Ok(appointment.into())
    }
}
