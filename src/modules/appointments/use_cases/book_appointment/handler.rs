use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;
use crate::modules::appointments::use_cases::book_appointment::decide::decide_book;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct BookAppointmentHandler<TStore>
where
    TStore: RecordStore<Appointment> + Send + Sync + 'static,
{
    store: Arc<TStore>,
    // Held across the availability check and the insert.
    booking: Mutex<()>,
}

impl<TStore> BookAppointmentHandler<TStore>
where
    TStore: RecordStore<Appointment> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            booking: Mutex::new(()),
        }
    }

    pub async fn handle(&self, command: BookAppointment) -> Result<Appointment, ApplicationError> {
        let _booking = self.booking.lock().await;
        let existing = self.store.get_all().await?;
        let appointment = decide_book(&existing, command).inspect_err(|reason| {
            tracing::warn!(%reason, "appointment rejected");
        })?;
        let appointment = self.store.insert(appointment).await?;
        tracing::info!(
            appointment_id = %appointment.id,
            date = %appointment.date,
            time_slot = %appointment.time_slot,
            "appointment booked"
        );
        Ok(appointment)
    }
}
