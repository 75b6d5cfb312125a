// Pure decision function for booking a lab appointment.
//
// Responsibilities
// - Accept only dates inside the booking window.
// - Refuse a slot that already holds a scheduled appointment.
// - New appointments always start as scheduled.

use chrono::NaiveDate;

use crate::modules::appointments::core::appointment::{Appointment, AppointmentStatus, TimeSlot};
use crate::modules::appointments::core::availability::{is_slot_booked, is_within_booking_window};
use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("a data {date} está fora do período de agendamento")]
    OutsideBookingWindow { date: NaiveDate },

    #[error("o horário {time_slot} de {date} já está reservado")]
    SlotTaken { date: NaiveDate, time_slot: TimeSlot },
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::OutsideBookingWindow { .. } => {
                ApplicationError::Rejected(reason.to_string())
            }
            DecideError::SlotTaken { .. } => ApplicationError::Conflict(reason.to_string()),
        }
    }
}

pub fn decide_book(
    existing: &[Appointment],
    command: BookAppointment,
) -> Result<Appointment, DecideError> {
    if !is_within_booking_window(command.date, command.today) {
        return Err(DecideError::OutsideBookingWindow { date: command.date });
    }
    if is_slot_booked(existing, command.date, command.time_slot) {
        return Err(DecideError::SlotTaken {
            date: command.date,
            time_slot: command.time_slot,
        });
    }
    Ok(Appointment {
        id: command.appointment_id,
        date: command.date,
        time_slot: command.time_slot,
        status: AppointmentStatus::Scheduled,
    })
}
