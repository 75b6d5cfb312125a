use serde::Serialize;

use crate::modules::essays::core::essay::{EssayRecord, arrange};
use crate::shared::core::primitives::DateOrder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
    pub theme: String,
}

impl From<&EssayRecord> for ChartPoint {
    fn from(essay: &EssayRecord) -> Self {
        Self {
            label: essay.date.format("%d/%m").to_string(),
            value: essay.total_score,
            theme: essay.theme.clone(),
        }
    }
}

/// Score evolution, oldest essay first. Clone the iterator to walk it again.
pub fn chart_series(
    essays: &[EssayRecord],
    order: DateOrder,
) -> impl Iterator<Item = ChartPoint> + Clone + '_ {
    arrange(essays, order, DateOrder::OldestFirst)
        .into_iter()
        .map(ChartPoint::from)
}
