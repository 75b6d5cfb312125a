use crate::modules::appointments::core::appointment::Appointment;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};

/// Every appointment, soonest first.
pub async fn appointments_by_date(
    store: &dyn RecordStore<Appointment>,
) -> Result<Vec<Appointment>, RecordStoreError> {
    let mut appointments = store.get_all().await?;
    appointments.sort_by(|a, b| (a.date, a.time_slot, &a.id).cmp(&(b.date, b.time_slot, &b.id)));
    Ok(appointments)
}
