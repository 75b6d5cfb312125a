use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::essays::core::essay::EssayRecord;
use crate::modules::essays::use_cases::list_essays::queries::essays_newest_first;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEssay {
    pub id: ID,
    pub theme: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub total_score: u32,
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
    pub c4: u32,
    pub c5: u32,
}

impl From<EssayRecord> for GqlEssay {
    fn from(e: EssayRecord) -> Self {
        Self {
            id: ID(e.id),
            theme: e.theme,
            date: e.date.to_string(),
            total_score: e.total_score,
            c1: e.c1,
            c2: e.c2,
            c3: e.c3,
            c4: e.c4,
            c5: e.c5,
        }
    }
}

#[derive(Default)]
pub struct EssaysQuery;

#[Object]
impl EssaysQuery {
    async fn essays(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEssay>> {
        let state = context.data_unchecked::<AppState>();
        let essays = essays_newest_first(state.essays.as_ref())
            .await
            .map_err(|e| ApiError::from(ApplicationError::from(e)))?;
        Ok(essays.into_iter().map(Into::into).collect())
    }

    async fn essay(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlEssay>> {
        let state = context.data_unchecked::<AppState>();
        let essay = state
            .essays
            .get_by_id(&id)
            .await
            .map_err(|e| ApiError::from(ApplicationError::from(e)))?;
        Ok(essay.map(Into::into))
    }
}
