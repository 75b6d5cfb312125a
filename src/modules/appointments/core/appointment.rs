use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::infrastructure::record_store::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub status: AppointmentStatus,
}

impl Record for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Canceled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Canceled => "canceled",
        }
    }
}

/// The essay lab's bookable hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "08:00")]
    At0800,
    #[serde(rename = "09:00")]
    At0900,
    #[serde(rename = "10:00")]
    At1000,
    #[serde(rename = "11:00")]
    At1100,
    #[serde(rename = "14:00")]
    At1400,
    #[serde(rename = "15:00")]
    At1500,
    #[serde(rename = "16:00")]
    At1600,
    #[serde(rename = "17:00")]
    At1700,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown time slot {0:?}")]
pub struct UnknownTimeSlot(pub String);

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::At0800,
        TimeSlot::At0900,
        TimeSlot::At1000,
        TimeSlot::At1100,
        TimeSlot::At1400,
        TimeSlot::At1500,
        TimeSlot::At1600,
        TimeSlot::At1700,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::At0800 => "08:00",
            TimeSlot::At0900 => "09:00",
            TimeSlot::At1000 => "10:00",
            TimeSlot::At1100 => "11:00",
            TimeSlot::At1400 => "14:00",
            TimeSlot::At1500 => "15:00",
            TimeSlot::At1600 => "16:00",
            TimeSlot::At1700 => "17:00",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}
