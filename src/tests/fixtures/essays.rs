// Shared essay fixtures for analytics and adapter tests.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::modules::essays::core::essay::EssayRecord;

pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
}

pub fn essay_with_scores(date: NaiveDate, [c1, c2, c3, c4, c5]: [u32; 5]) -> EssayRecord {
    EssayRecord {
        id: Uuid::now_v7().to_string(),
        theme: format!("Tema de {date}"),
        date,
        total_score: c1 + c2 + c3 + c4 + c5,
        c1,
        c2,
        c3,
        c4,
        c5,
    }
}

/// Spreads `total` evenly over the competencies, remainder on c1.
pub fn essay_scoring(date: NaiveDate, total: u32) -> EssayRecord {
    let share = total / 5;
    essay_with_scores(date, [share + total % 5, share, share, share, share])
}

/// One essay per week, newest first, ending on the anchor date.
pub fn weekly_history(totals: &[u32]) -> Vec<EssayRecord> {
    totals
        .iter()
        .enumerate()
        .map(|(week, total)| {
            let date = anchor_date()
                .checked_sub_days(Days::new(7 * week as u64))
                .unwrap();
            essay_scoring(date, *total)
        })
        .collect()
}
