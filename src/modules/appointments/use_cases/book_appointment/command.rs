use chrono::NaiveDate;

use crate::modules::appointments::core::appointment::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookAppointment {
    pub appointment_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    /// The caller's current date, bounding the booking window.
    pub today: NaiveDate,
}
