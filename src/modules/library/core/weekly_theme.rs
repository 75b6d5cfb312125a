use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::infrastructure::record_store::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTheme {
    pub id: String,
    pub theme: String,
    pub description: Option<String>,
    pub week_start: NaiveDate,
    pub active: bool,
}

impl Record for WeeklyTheme {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The promoted theme: the active one with the latest week start.
pub fn current_theme(themes: &[WeeklyTheme]) -> Option<&WeeklyTheme> {
    themes
        .iter()
        .filter(|t| t.active)
        .max_by_key(|t| t.week_start)
}
