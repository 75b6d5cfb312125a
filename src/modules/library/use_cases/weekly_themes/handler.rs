use crate::modules::library::core::weekly_theme::WeeklyTheme;
use crate::modules::library::use_cases::weekly_themes::decide::{CreateWeeklyTheme, decide_create};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct CreateWeeklyThemeHandler<TStore>
where
    TStore: RecordStore<WeeklyTheme> + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateWeeklyThemeHandler<TStore>
where
    TStore: RecordStore<WeeklyTheme> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateWeeklyTheme) -> Result<WeeklyTheme, ApplicationError> {
        let theme = decide_create(command).inspect_err(|reason| {
            tracing::warn!(%reason, "weekly theme rejected");
        })?;
        let theme = self.store.insert(theme).await?;
        tracing::info!(theme_id = %theme.id, week_start = %theme.week_start, "weekly theme created");
        Ok(theme)
    }
}
