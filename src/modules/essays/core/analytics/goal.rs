use serde::Serialize;

use crate::modules::essays::core::analytics::trend::Trend;

/// The ENEM score every student is coached towards.
pub const TARGET_SCORE: u32 = 900;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDistance {
    pub target: u32,
    pub current_average: u32,
    pub distance: i64,
    pub needs_improvement: bool,
    pub progress_percentage: f64,
}

pub fn goal_distance(current_average: u32) -> GoalDistance {
    let distance = i64::from(TARGET_SCORE) - i64::from(current_average);
    GoalDistance {
        target: TARGET_SCORE,
        current_average,
        distance,
        needs_improvement: distance > 0,
        progress_percentage: f64::from(current_average) / f64::from(TARGET_SCORE) * 100.0,
    }
}

/// Coarse band shown next to the overall average.
pub fn score_band(average: u32) -> Trend {
    match average {
        700.. => Trend::Up,
        500..700 => Trend::Stable,
        _ => Trend::Down,
    }
}
