// Dashboard read model.
//
// The period window drives the headline numbers and the chart. Trend,
// competency statistics, ranking and goal always read the full history.

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::essays::core::analytics::averages::{
    CompetencyStats, competency_stats, overall_average,
};
use crate::modules::essays::core::analytics::chart::{ChartPoint, chart_series};
use crate::modules::essays::core::analytics::goal::{GoalDistance, TARGET_SCORE, goal_distance, score_band};
use crate::modules::essays::core::analytics::ranking::{CompetencyRanking, rank_competencies};
use crate::modules::essays::core::analytics::trend::{Trend, TrendReport, score_trend};
use crate::modules::essays::core::analytics::window::{Period, within_period};
use crate::modules::essays::core::essay::{EssayRecord, arrange};
use crate::shared::core::primitives::DateOrder;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub period: Period,
    pub essay_count: usize,
    pub average_score: u32,
    pub latest_score: Option<u32>,
    pub target: u32,
    pub average_band: Trend,
    pub trend: TrendReport,
    pub competencies: Vec<CompetencyStats>,
    pub ranking: CompetencyRanking,
    pub goal: GoalDistance,
    pub chart: Vec<ChartPoint>,
}

pub fn build_dashboard(
    history: &[EssayRecord],
    order: DateOrder,
    period: Period,
    today: NaiveDate,
) -> DashboardView {
    let windowed = within_period(history, period, today);
    let average_score = overall_average(&windowed);
    let latest_score = arrange(&windowed, order, DateOrder::NewestFirst)
        .first()
        .map(|e| e.total_score);

    DashboardView {
        period,
        essay_count: windowed.len(),
        average_score,
        latest_score,
        target: TARGET_SCORE,
        average_band: score_band(average_score),
        trend: score_trend(history, order),
        competencies: competency_stats(history, order),
        ranking: rank_competencies(history),
        goal: goal_distance(overall_average(history)),
        chart: chart_series(&windowed, order).collect(),
    }
}
