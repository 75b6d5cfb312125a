use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::essays::core::essay::EssayRecord;

/// Dashboard time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "15days")]
    FifteenDays,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[default]
    #[serde(rename = "all")]
    All,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown period {0:?}")]
pub struct UnknownPeriod(pub String);

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::SevenDays => "7days",
            Period::FifteenDays => "15days",
            Period::OneMonth => "1month",
            Period::ThreeMonths => "3months",
            Period::All => "all",
        }
    }

    /// Records must be dated strictly after the cutoff. `None` keeps everything.
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::SevenDays => today.checked_sub_days(Days::new(7)),
            Period::FifteenDays => today.checked_sub_days(Days::new(15)),
            Period::OneMonth => today.checked_sub_months(Months::new(1)),
            Period::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Period::All => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7days" => Ok(Period::SevenDays),
            "15days" => Ok(Period::FifteenDays),
            "1month" => Ok(Period::OneMonth),
            "3months" => Ok(Period::ThreeMonths),
            "all" => Ok(Period::All),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

/// Keeps the essays inside `period`, preserving their order.
pub fn within_period(essays: &[EssayRecord], period: Period, today: NaiveDate) -> Vec<EssayRecord> {
    match period.cutoff(today) {
        Some(cutoff) => essays.iter().filter(|e| e.date > cutoff).cloned().collect(),
        None => essays.to_vec(),
    }
}
