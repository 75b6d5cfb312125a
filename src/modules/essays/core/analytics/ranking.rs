use serde::Serialize;

use crate::modules::essays::core::analytics::averages::{competency_mean, round_score};
use crate::modules::essays::core::essay::{Competency, EssayRecord, MAX_COMPETENCY_SCORE};

const RANKED: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCompetency {
    pub competency: Competency,
    pub name: &'static str,
    pub average: u32,
    pub percentage: f64,
    pub tip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CompetencyRanking {
    pub weakest: Vec<RankedCompetency>,
    pub strongest: Vec<RankedCompetency>,
}

/// Ranks competency means: the two lowest ascending, the two highest descending.
pub fn rank_averages(averages: [(Competency, f64); 5]) -> CompetencyRanking {
    let mut sorted: Vec<RankedCompetency> = averages
        .into_iter()
        .map(|(competency, avg)| RankedCompetency {
            competency,
            name: competency.name(),
            average: round_score(avg),
            percentage: avg / f64::from(MAX_COMPETENCY_SCORE) * 100.0,
            tip: competency.tip(),
        })
        .collect();
    sorted.sort_by(|a, b| a.percentage.total_cmp(&b.percentage));

    let weakest = sorted.iter().take(RANKED).cloned().collect();
    let strongest = sorted.iter().rev().take(RANKED).cloned().collect();
    CompetencyRanking { weakest, strongest }
}

/// Empty input yields an empty ranking.
pub fn rank_competencies(essays: &[EssayRecord]) -> CompetencyRanking {
    if essays.is_empty() {
        return CompetencyRanking::default();
    }
    rank_averages(Competency::ALL.map(|c| (c, competency_mean(essays, c))))
}
