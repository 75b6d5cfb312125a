// Recent-versus-previous performance trend.
//
// The newest three records form the recent window and records four to six the
// previous one. Without a previous window the trend is stable.

use serde::Serialize;

use crate::modules::essays::core::analytics::averages::mean;
use crate::modules::essays::core::essay::{Competency, EssayRecord, arrange};
use crate::shared::core::primitives::DateOrder;

pub const SCORE_TREND_THRESHOLD: f64 = 20.0;
pub const COMPETENCY_TREND_THRESHOLD: f64 = 5.0;
pub const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn classify(difference: f64, threshold: f64) -> Trend {
        if difference > threshold {
            Trend::Up
        } else if difference < -threshold {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub trend: Trend,
    pub recent_average: f64,
    pub previous_average: f64,
    pub difference: f64,
    pub percentage_change: f64,
    pub has_previous: bool,
}

/// `newest_first` holds one value per record, most recent first.
pub fn split_trend(newest_first: &[u32], threshold: f64) -> TrendReport {
    let recent_end = newest_first.len().min(TREND_WINDOW);
    let previous_end = newest_first.len().min(TREND_WINDOW * 2);
    let recent = &newest_first[..recent_end];
    let previous = &newest_first[recent_end..previous_end];

    let recent_average = mean(recent.iter().copied());
    let previous_average = if previous.is_empty() {
        recent_average
    } else {
        mean(previous.iter().copied())
    };
    let difference = recent_average - previous_average;
    let percentage_change = if previous_average > 0.0 {
        difference / previous_average * 100.0
    } else {
        0.0
    };

    TrendReport {
        trend: Trend::classify(difference, threshold),
        recent_average,
        previous_average,
        difference,
        percentage_change,
        has_previous: !previous.is_empty(),
    }
}

pub fn score_trend(essays: &[EssayRecord], order: DateOrder) -> TrendReport {
    let totals: Vec<u32> = arrange(essays, order, DateOrder::NewestFirst)
        .into_iter()
        .map(|e| e.total_score)
        .collect();
    split_trend(&totals, SCORE_TREND_THRESHOLD)
}

pub fn competency_trend(essays: &[EssayRecord], order: DateOrder, competency: Competency) -> Trend {
    let scores: Vec<u32> = arrange(essays, order, DateOrder::NewestFirst)
        .into_iter()
        .map(|e| e.score(competency))
        .collect();
    split_trend(&scores, COMPETENCY_TREND_THRESHOLD).trend
}
