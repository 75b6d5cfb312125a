use serde::Serialize;

use crate::modules::essays::core::analytics::trend::{Trend, competency_trend};
use crate::modules::essays::core::essay::{Competency, EssayRecord, MAX_COMPETENCY_SCORE};
use crate::shared::core::primitives::DateOrder;

/// Arithmetic mean, 0 for no values.
pub fn mean(values: impl IntoIterator<Item = u32>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Rounds a non-negative score to the nearest integer, halves up.
pub fn round_score(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

pub fn overall_average(essays: &[EssayRecord]) -> u32 {
    round_score(mean(essays.iter().map(|e| e.total_score)))
}

pub fn competency_mean(essays: &[EssayRecord], competency: Competency) -> f64 {
    mean(essays.iter().map(|e| e.score(competency)))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyStats {
    pub competency: Competency,
    pub name: &'static str,
    pub average: u32,
    pub min: u32,
    pub max: u32,
    /// Rounded average as a share of the 200-point maximum.
    pub percentage: f64,
    pub trend: Trend,
}

pub fn competency_stats(essays: &[EssayRecord], order: DateOrder) -> Vec<CompetencyStats> {
    Competency::ALL
        .iter()
        .map(|&competency| {
            let scores = essays.iter().map(|e| e.score(competency));
            let average = round_score(competency_mean(essays, competency));
            CompetencyStats {
                competency,
                name: competency.name(),
                average,
                min: scores.clone().min().unwrap_or(0),
                max: scores.max().unwrap_or(0),
                percentage: f64::from(average) / f64::from(MAX_COMPETENCY_SCORE) * 100.0,
                trend: competency_trend(essays, order, competency),
            }
        })
        .collect()
}
