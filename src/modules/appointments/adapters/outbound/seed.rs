// Demo appointments loaded into the in-memory store at startup.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::appointments::core::appointment::{Appointment, AppointmentStatus, TimeSlot};

pub fn demo_appointments() -> Vec<Appointment> {
    [
        (NaiveDate::from_ymd_opt(2025, 10, 23), TimeSlot::At1400),
        (NaiveDate::from_ymd_opt(2025, 10, 25), TimeSlot::At1000),
    ]
    .into_iter()
    .filter_map(|(date, time_slot)| {
        Some(Appointment {
            id: Uuid::now_v7().to_string(),
            date: date?,
            time_slot,
            status: AppointmentStatus::Scheduled,
        })
    })
    .collect()
}

#[cfg(test)]
mod appointment_seed_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_seed_every_demo_appointment() {
        let appointments = demo_appointments();
        assert_eq!(appointments.len(), 2);
        assert!(
            appointments
                .iter()
                .all(|apt| apt.status == AppointmentStatus::Scheduled)
        );
    }
}
