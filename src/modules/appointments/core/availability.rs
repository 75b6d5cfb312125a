// Slot availability for the essay lab.
//
// A slot is taken only by a scheduled appointment on the same day and hour;
// completed and canceled appointments never block it.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::modules::appointments::core::appointment::{Appointment, AppointmentStatus, TimeSlot};

/// Days ahead of today that can still be booked, today included.
pub const BOOKING_HORIZON_DAYS: u64 = 30;

pub fn is_slot_booked(appointments: &[Appointment], date: NaiveDate, slot: TimeSlot) -> bool {
    appointments.iter().any(|apt| {
        apt.date == date && apt.time_slot == slot && apt.status == AppointmentStatus::Scheduled
    })
}

pub fn is_within_booking_window(date: NaiveDate, today: NaiveDate) -> bool {
    let last = today
        .checked_add_days(Days::new(BOOKING_HORIZON_DAYS))
        .unwrap_or(NaiveDate::MAX);
    (today..=last).contains(&date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub time_slot: TimeSlot,
    pub booked: bool,
}

pub fn day_board(appointments: &[Appointment], date: NaiveDate) -> Vec<SlotAvailability> {
    TimeSlot::ALL
        .into_iter()
        .map(|time_slot| SlotAvailability {
            time_slot,
            booked: is_slot_booked(appointments, date, time_slot),
        })
        .collect()
}

/// Scheduled appointments from today on, soonest first.
pub fn upcoming(appointments: &[Appointment], today: NaiveDate) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = appointments
        .iter()
        .filter(|apt| apt.status == AppointmentStatus::Scheduled && apt.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|apt| (apt.date, apt.time_slot));
    upcoming
}
