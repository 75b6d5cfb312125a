use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::core::availability::{
    SlotAvailability, day_board, is_within_booking_window,
};

/// One day of the booking calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotBoard {
    pub date: NaiveDate,
    pub bookable: bool,
    pub slots: Vec<SlotAvailability>,
}

pub fn slot_board(appointments: &[Appointment], date: NaiveDate, today: NaiveDate) -> SlotBoard {
    SlotBoard {
        date,
        bookable: is_within_booking_window(date, today),
        slots: day_board(appointments, date),
    }
}
