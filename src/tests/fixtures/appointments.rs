// Shared appointment fixtures.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::appointments::core::appointment::{Appointment, AppointmentStatus, TimeSlot};

pub fn appointment_on(date: NaiveDate, time_slot: TimeSlot, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: Uuid::now_v7().to_string(),
        date,
        time_slot,
        status,
    }
}
